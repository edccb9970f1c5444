use chrono::Utc;
use password_auth::generate_hash;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub use entity::{meetings, roles, transcriptions, users, Id};

pub mod error;
pub mod meeting;
pub mod transcription;
pub mod user;

/// Seeds a freshly migrated database with accounts for local development.
pub async fn seed_database(db: &DatabaseConnection) {
    let now = Utc::now();

    users::ActiveModel {
        name: Set("Admin".to_owned()),
        email: Set("admin@reunion.local".to_owned()),
        password: Set(generate_hash("admin-password")),
        role: Set(roles::Role::Admin),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    users::ActiveModel {
        name: Set("Alice Martin".to_owned()),
        email: Set("alice@example.com".to_owned()),
        password: Set(generate_hash("password")),
        role: Set(roles::Role::User),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();
}
