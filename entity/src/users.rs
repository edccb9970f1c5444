//! SeaORM Entity for users table.
//! Account records created at registration.

use crate::roles::Role;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::users::Model)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "reunion_platform", table_name = "users")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    pub name: String,

    /// Login identifier, unique across accounts
    #[sea_orm(unique)]
    pub email: String,

    /// Salted one-way hash of the credential, never serialized
    #[serde(skip_serializing)]
    pub password: String,

    /// Account role, drives the login greeting. Not accepted from request
    /// bodies; every registration starts as the default role.
    #[serde(skip_deserializing)]
    pub role: Role,

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
