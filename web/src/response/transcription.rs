use serde::Serialize;
use utoipa::ToSchema;

/// Transcript text returned for an uploaded audio file.
#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptionResponse {
    pub transcription: String,
}
