//! Business logic for transcribing uploaded meeting audio.

use crate::error::Error;
use crate::gateway::deepgram::{self, DeepgramClient};
use crate::uploads::TempUpload;
use entity_api::{transcription, transcriptions};
use log::*;
use sea_orm::DatabaseConnection;
use service::config::Config;

/// Transcribe one uploaded audio file and record the result.
///
/// The upload is written below the configured upload directory for the duration
/// of the call and removed again on every exit path, including the failing ones.
/// The stored `audio_path` records where the upload lived while it was being
/// transcribed.
pub async fn create(
    db: &DatabaseConnection,
    config: &Config,
    file_name: &str,
    audio: Vec<u8>,
) -> Result<transcriptions::Model, Error> {
    info!(
        "Transcribing uploaded file '{}' ({} bytes)",
        file_name,
        audio.len()
    );

    let upload = TempUpload::write(config.upload_dir(), file_name, &audio).await?;

    let deepgram_client = DeepgramClient::new(config)?;
    let content_type = deepgram::content_type_for(file_name);
    let transcript = deepgram_client.transcribe(audio, content_type).await?;

    let audio_path = upload.path().display().to_string();
    let transcription = transcription::create(db, audio_path, transcript).await?;

    Ok(transcription)
}
