//! SeaORM Entity for meetings table.
//! One row per meeting created through the API.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meetings::Model)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "reunion_platform", table_name = "meetings")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    /// Meeting subject line
    pub subject: String,

    /// Date as supplied by the caller, stored verbatim
    pub date: String,

    /// Time as supplied by the caller, stored verbatim
    pub time: String,

    pub participant_count: i32,

    /// Owning user id. Not a database foreign key and not checked for
    /// existence at creation time.
    #[schema(value_type = Uuid)]
    pub user_id: Id,

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let meeting = Model {
            id: Id::new_v4(),
            subject: "Kickoff".to_string(),
            date: "2024-06-01".to_string(),
            time: "14:00".to_string(),
            participant_count: 8,
            user_id: Id::new_v4(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };

        let json = serde_json::to_value(&meeting).unwrap();
        assert_eq!(json["participantCount"], 8);
        assert_eq!(json["userId"], serde_json::json!(meeting.user_id));
        assert!(json.get("participant_count").is_none());
    }
}
