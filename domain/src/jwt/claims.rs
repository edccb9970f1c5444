//! This module defines the claims used in JSON Web Tokens (JWTs) within the domain layer.
//!
//! It provides structures for the claims carried by the tokens the platform issues. The
//! current implementation includes `LoginClaims`, which is encoded into the token handed
//! out at login and contains the authenticated user's id along with the standard
//! issued-at and expiry fields.

use entity::Id;
use serde::{Deserialize, Serialize};

/// Represents the claims for a login token.
///
/// This struct is used to serialize and deserialize the claims for a login token.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoginClaims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    // Browser clients read this claim directly, so keep it JS style case.
    #[serde(rename = "userId")]
    pub(crate) user_id: Id,
}
