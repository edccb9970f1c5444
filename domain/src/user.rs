//! Business logic for user accounts: registration and login authentication.

use crate::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind};
use entity_api::{user, users};
use log::*;
use sea_orm::DatabaseConnection;

/// Registers a new user account.
///
/// The plaintext password on the incoming model is hashed before it is stored, so it
/// never reaches the database in readable form.
pub async fn register(
    db: &DatabaseConnection,
    user_model: users::Model,
) -> Result<users::Model, Error> {
    info!("Registering new user with email: {}", user_model.email);

    let user = user::create(db, user_model).await?;
    Ok(user)
}

/// Authenticates a login attempt by email and password.
///
/// Fails with a not found kind when no account exists for `email` and with an
/// unauthenticated kind when the password does not match, so that the web layer
/// can respond to the two cases differently.
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<users::Model, Error> {
    debug!("Authenticating user with email: {}", email);

    let user = user::find_by_email(db, email).await?.ok_or_else(|| {
        info!("Login attempt for unknown email: {}", email);
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::NotFound,
            )),
        }
    })?;

    user::verify_password(password, &user.password).await?;

    Ok(user)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod test {
    use super::*;
    use entity::{roles::Role, Id};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_user(password_hash: String) -> users::Model {
        let now = chrono::Utc::now();
        users::Model {
            id: Id::new_v4(),
            name: "Alice Martin".to_string(),
            email: "alice@example.com".to_string(),
            password: password_hash,
            role: Role::User,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn register_returns_the_created_user() -> Result<(), Error> {
        let user_model = create_test_user("password".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model.clone()]])
            .into_connection();

        let user = register(&db, user_model.clone()).await?;
        assert_eq!(user.email, user_model.email);

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_returns_the_user_for_valid_credentials() -> Result<(), Error> {
        let user_model = create_test_user(user::generate_hash("secret".to_string()));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model.clone()]])
            .into_connection();

        let user = authenticate(&db, "alice@example.com", "secret").await?;
        assert_eq!(user.id, user_model.id);

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_an_unknown_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let result = authenticate(&db, "nobody@example.com", "secret").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
    }

    #[tokio::test]
    async fn authenticate_rejects_a_wrong_password() {
        let user_model = create_test_user(user::generate_hash("secret".to_string()));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model]])
            .into_connection();

        let result = authenticate(&db, "alice@example.com", "not-the-secret").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Unauthenticated))
        );
    }
}
