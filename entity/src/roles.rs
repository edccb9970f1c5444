use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role")]
pub enum Role {
    #[sea_orm(string_value = "utilisateur")]
    #[serde(rename = "utilisateur")]
    #[default]
    User,
    #[sea_orm(string_value = "admin")]
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Greeting returned in the login response for each account role.
    pub fn greeting(&self) -> &'static str {
        match self {
            Role::User => "Hello client",
            Role::Admin => "Hello admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(fmt, "utilisateur"),
            Role::Admin => write!(fmt, "admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_matches_role() {
        assert_eq!(Role::User.greeting(), "Hello client");
        assert_eq!(Role::Admin.greeting(), "Hello admin");
    }

    #[test]
    fn serializes_to_db_values() {
        assert_eq!(
            serde_json::to_value(Role::User).unwrap(),
            serde_json::json!("utilisateur")
        );
        assert_eq!(
            serde_json::to_value(Role::Admin).unwrap(),
            serde_json::json!("admin")
        );
    }

    #[test]
    fn displays_as_db_value() {
        assert_eq!(Role::User.to_string(), "utilisateur");
        assert_eq!(Role::default(), Role::User);
    }
}
