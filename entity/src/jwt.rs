use crate::Id;
use serde::Serialize;
use utoipa::ToSchema;

/// A signed JSON Web Token issued at login.
/// Note: this struct has no corresponding table in the database.
///
/// - `token`: the encoded, signed JWT string handed to the client.
/// - `sub`: the id of the user the token was issued to, kept alongside the
///    token so callers can read the subject without decoding it.
#[derive(Serialize, Debug, ToSchema)]
#[schema(as = jwt::Jwt)] // OpenAPI schema
pub struct Jwt {
    pub token: String,
    #[schema(value_type = Uuid)]
    pub sub: Id,
}
