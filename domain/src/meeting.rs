//! Business logic for scheduling meetings.

use crate::error::Error;
use entity_api::{meeting, meetings};
use log::*;
use sea_orm::DatabaseConnection;

/// Persists a new meeting.
///
/// The owning user id on the model is stored as supplied. It is deliberately not
/// checked against the users table, so a meeting can be scheduled ahead of the
/// owner's account existing.
pub async fn create(
    db: &DatabaseConnection,
    meeting_model: meetings::Model,
) -> Result<meetings::Model, Error> {
    info!(
        "Creating meeting '{}' for user: {}",
        meeting_model.subject, meeting_model.user_id
    );

    let meeting = meeting::create(db, meeting_model).await?;
    Ok(meeting)
}
