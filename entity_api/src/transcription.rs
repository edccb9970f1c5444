//! CRUD operations for transcriptions table.

use super::error::Error;
use entity::transcriptions::{ActiveModel, Model};
use log::*;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, TryIntoModel};

/// Creates a new transcription record for a stored audio file.
pub async fn create(
    db: &impl ConnectionTrait,
    audio_path: String,
    transcript: String,
) -> Result<Model, Error> {
    debug!("Creating new transcription for audio file: {audio_path}");

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        audio_path: Set(audio_path),
        transcript: Set(transcript),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod test {
    use super::*;
    use entity::Id;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_returns_the_inserted_transcription() -> Result<(), Error> {
        let now = chrono::Utc::now();
        let transcription_model = Model {
            id: Id::new_v4(),
            audio_path: "uploads/1717244400000-reunion.mp3".to_owned(),
            transcript: "Bonjour à tous.".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[transcription_model.clone()]])
            .into_connection();

        let transcription = create(
            &db,
            transcription_model.audio_path.clone(),
            transcription_model.transcript.clone(),
        )
        .await?;

        assert_eq!(transcription.audio_path, transcription_model.audio_path);
        assert_eq!(transcription.transcript, transcription_model.transcript);

        Ok(())
    }
}
