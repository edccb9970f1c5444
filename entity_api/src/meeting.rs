//! CRUD operations for meetings table.

use super::error::Error;
use entity::meetings::{ActiveModel, Model};
use log::*;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait};

/// Inserts a new meeting row. The owning user id is taken as-is from the
/// model; no existence check is performed against the users table.
pub async fn create(db: &impl ConnectionTrait, meeting_model: Model) -> Result<Model, Error> {
    debug!(
        "New Meeting Model to be inserted for user: {}",
        meeting_model.user_id
    );

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        subject: Set(meeting_model.subject),
        date: Set(meeting_model.date),
        time: Set(meeting_model.time),
        participant_count: Set(meeting_model.participant_count),
        user_id: Set(meeting_model.user_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.insert(db).await?)
}
