use domain::Id;
use serde::Serialize;
use utoipa::ToSchema;

/// Successful login payload: a greeting chosen by account role, the signed
/// bearer token and the id of the authenticated user.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    /// Kept in JS style casing, browser clients read this field directly.
    #[serde(rename = "userId")]
    #[schema(value_type = Uuid)]
    pub user_id: Id,
}
