use serde::Deserialize;
use utoipa::ToSchema;

/// Credentials presented at login.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}
