//! This module provides functionality for handling JSON Web Tokens (JWTs) within the domain layer.
//! It includes the definition of claims used in JWTs, as well as functions for generating tokens.
//!
//! The primary use case for this module is to generate login tokens, which are handed to
//! clients at authentication time and presented on subsequent calls to the platform. The
//! tokens carry the id of the authenticated user and expire five hours after being issued.
//!
//! The module also re-exports the `Jwt` struct from the `entity` module for convenience.
//!
//! # Example
//!
//! ```rust
//! use domain::jwt::generate_login_token;
//! use service::config::Config;
//! use entity::Id;
//!
//! fn example(config: &Config, user_id: Id) {
//!     match generate_login_token(config, user_id) {
//!         Ok(jwt) => println!("Generated JWT: {:?}", jwt),
//!         Err(e) => eprintln!("Error generating JWT: {:?}", e),
//!     }
//! }
//! ```

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use chrono::Utc;
use claims::LoginClaims;
use entity::Id;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::*;
use service::config::Config;

// re-export the Jwt struct from the entity module
pub use entity::jwt::Jwt;

pub(crate) mod claims;

// Matches the lifetime clients were built against.
const LOGIN_TOKEN_TTL_SECONDS: usize = 5 * 60 * 60;

/// Generates a login token for an authenticated user.
///
/// The token is signed with the configured signing key and carries the user's id as both
/// the `userId` claim and the `sub` field of the returned [`Jwt`].
pub fn generate_login_token(config: &Config, user_id: Id) -> Result<Jwt, Error> {
    let token_signing_key = config.token_signing_key().ok_or_else(|| {
        warn!("Failed to get token signing key from config");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let issued_at = Utc::now().timestamp() as usize;
    let claims = LoginClaims {
        exp: issued_at + LOGIN_TOKEN_TTL_SECONDS,
        iat: issued_at,
        user_id,
    };

    // Encode the claims into a JWT
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(token_signing_key.as_bytes()),
    )?;

    Ok(Jwt {
        token,
        sub: user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serial_test::serial;
    use std::env;

    /// Helper struct to manage environment variables in tests
    struct EnvGuard {
        saved_vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[&str]) -> Self {
            let saved_vars = vars
                .iter()
                .map(|var| (var.to_string(), env::var(var).ok()))
                .collect();
            EnvGuard { saved_vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore all saved environment variables
            for (key, value) in &self.saved_vars {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn generated_token_carries_the_user_id_claim() {
        let _guard = EnvGuard::new(&["TOKEN_SIGNING_KEY"]);
        env::set_var("TOKEN_SIGNING_KEY", "test_signing_key_123");

        let config = Config::default();
        let user_id = Id::new_v4();

        let jwt = generate_login_token(&config, user_id).unwrap();
        assert_eq!(jwt.sub, user_id);

        let decoded = decode::<LoginClaims>(
            &jwt.token,
            &DecodingKey::from_secret(b"test_signing_key_123"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.user_id, user_id);
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 5 * 60 * 60);
    }

    #[test]
    #[serial]
    fn missing_signing_key_is_a_config_error() {
        let _guard = EnvGuard::new(&["TOKEN_SIGNING_KEY"]);
        env::remove_var("TOKEN_SIGNING_KEY");

        let config = Config::default();
        assert!(
            config.token_signing_key().is_none(),
            "Signing key should be None"
        );

        let result = generate_login_token(&config, Id::new_v4());

        if let Err(e) = result {
            match e.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::Config) => {}
                _ => panic!("Expected Config error, got: {:?}", e.error_kind),
            }
        } else {
            panic!("Expected an error when no signing key is configured");
        }
    }
}
