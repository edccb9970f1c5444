use crate::response::transcription::TranscriptionResponse;
use crate::{AppState, Error};

use axum::extract::multipart::Multipart;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use domain::transcription as TranscriptionApi;
use log::*;

/// Largest audio upload accepted, enforced on the route via `DefaultBodyLimit`.
pub(crate) const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// CREATE a transcription from an uploaded audio file
///
/// Accepts a multipart form with a single file field named `audio`, forwards
/// the bytes to the speech-to-text service and returns the transcript. The
/// upload is stored under the configured upload directory only for the
/// duration of the request.
#[utoipa::path(
    post,
    path = "/transcribe",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio transcribed", body = TranscriptionResponse),
        (status = 400, description = "No audio file uploaded"),
        (status = 502, description = "The speech-to-text service is unreachable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    debug!("POST /transcribe");

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() == Some("audio") {
            let file_name = field.file_name().unwrap_or("audio").to_string();
            let data = field.bytes().await.map_err(read_error)?;
            upload = Some((file_name, data.to_vec()));
            break;
        }
    }

    let Some((file_name, audio)) = upload else {
        info!("Rejecting transcription request without an audio file");
        return Err(Error::from(DomainError {
            source: None,
            error_kind: DomainErrorKind::Validation(
                "Aucun fichier audio téléchargé".to_string(),
            ),
        }));
    };

    let transcription =
        TranscriptionApi::create(app_state.db_conn_ref(), &app_state.config, &file_name, audio)
            .await?;

    Ok(Json(TranscriptionResponse {
        transcription: transcription.transcript,
    }))
}

fn read_error(err: axum::extract::multipart::MultipartError) -> DomainError {
    warn!("Failed to read multipart request body: {err:?}");
    DomainError {
        source: Some(Box::new(err)),
        error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
            "Failed to read multipart request body".to_string(),
        )),
    }
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::router;
    use axum::body::Body;
    use axum::http::{self, Request, StatusCode};
    use domain::{transcriptions, Id};
    use mockito::Server;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serial_test::serial;
    use service::config::Config;
    use std::env;
    use std::sync::Arc;
    use tower::ServiceExt;

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

    const BOUNDARY: &str = "test-boundary";

    fn multipart_request(body: String) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder()
            .method("POST")
            .uri("/transcribe")
            .header(
                http::header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))?)
    }

    fn file_part(name: &str, file_name: &str, bytes: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n\
             {bytes}\r\n--{BOUNDARY}--\r\n"
        )
    }

    fn app(results: Vec<transcriptions::Model>) -> axum::Router {
        let mut db = MockDatabase::new(DatabaseBackend::Postgres);
        if !results.is_empty() {
            db = db.append_query_results([results]);
        }
        let db = Arc::new(db.into_connection());
        let app_state = crate::AppState::new(Config::default(), &db);
        router::transcription_routes(app_state)
    }

    #[tokio::test]
    #[serial]
    async fn create_transcribes_an_uploaded_file() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let upload_dir = tempfile::tempdir()?;
        let _guard = EnvGuard::new(&["DEEPGRAM_BASE_URL", "DEEPGRAM_API_KEY", "UPLOAD_DIR"]);
        env::set_var("DEEPGRAM_BASE_URL", server.url());
        env::set_var("DEEPGRAM_API_KEY", "test_deepgram_key");
        env::set_var("UPLOAD_DIR", upload_dir.path());

        let listen_mock = server
            .mock("POST", "/listen")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "results": {
                        "channels": [
                            { "alternatives": [ { "transcript": "Bonjour à tous." } ] }
                        ]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let now = chrono::Utc::now();
        let app = app(vec![transcriptions::Model {
            id: Id::new_v4(),
            audio_path: "uploads/1-meeting.mp3".to_string(),
            transcript: "Bonjour à tous.".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }]);

        let response = app
            .oneshot(multipart_request(file_part(
                "audio",
                "meeting.mp3",
                "fake-mp3-bytes",
            ))?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["transcription"], "Bonjour à tous.");

        listen_mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn create_without_an_audio_field_is_400() -> anyhow::Result<()> {
        // No query results are queued and no speech API is configured: any
        // external or database call would surface as a 500.
        let app = app(Vec::new());

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n\
             --{BOUNDARY}--\r\n"
        );
        let response = app.oneshot(multipart_request(body)?).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["message"], "Aucun fichier audio téléchargé");

        Ok(())
    }

    #[tokio::test]
    async fn create_with_an_empty_form_is_400() -> anyhow::Result<()> {
        let app = app(Vec::new());

        let response = app
            .oneshot(multipart_request(format!("--{BOUNDARY}--\r\n"))?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
