//! SeaORM Entity for transcriptions table.
//! Stores transcripts returned by the speech-to-text service.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::transcriptions::Model)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "reunion_platform", table_name = "transcriptions")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    /// Where the uploaded audio was written before transcription
    pub audio_path: String,

    /// Full transcript text
    #[sea_orm(column_type = "Text")]
    pub transcript: String,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
