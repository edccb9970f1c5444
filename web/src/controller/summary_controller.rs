use crate::params::summary::SummarizeParams;
use crate::response::summary::SummaryResponse;
use crate::{AppState, Error};
use axum::{extract::State, response::IntoResponse, Json};
use domain::summary as SummaryApi;
use log::*;

/// CREATE a summary of a block of text
///
/// Forwards the text to the completion service with a fixed token budget and
/// returns the trimmed first completion.
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeParams,
    responses(
        (status = 200, description = "Summary generated", body = SummaryResponse),
        (status = 400, description = "The text to summarize is missing or empty"),
        (status = 502, description = "The completion service is unreachable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<SummarizeParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST /summarize with {} characters", params.text.len());

    let summary = SummaryApi::create(&app_state.config, &params.text).await?;

    Ok(Json(SummaryResponse { summary }))
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

    fn app() -> axum::Router {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let app_state = crate::AppState::new(Config::default(), &db);
        router::summary_routes(app_state)
    }

    fn summarize_request(body: serde_json::Value) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder()
            .method("POST")
            .uri("/summarize")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?)
    }

    #[tokio::test]
    #[serial]
    async fn create_returns_the_generated_summary() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let _guard = EnvGuard::new(&["OPENAI_BASE_URL", "OPENAI_API_KEY"]);
        env::set_var("OPENAI_BASE_URL", server.url());
        env::set_var("OPENAI_API_KEY", "test_openai_key");

        server
            .mock("POST", "/completions")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "choices": [ { "text": "  Un résumé concis.  " } ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = app()
            .oneshot(summarize_request(
                serde_json::json!({ "text": "Un long compte rendu de réunion." }),
            )?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["summary"], "Un résumé concis.");

        Ok(())
    }

    #[tokio::test]
    async fn create_with_whitespace_only_text_is_400() -> anyhow::Result<()> {
        let response = app()
            .oneshot(summarize_request(serde_json::json!({ "text": "   " }))?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["message"], "Le texte à résumer est requis.");

        Ok(())
    }

    #[tokio::test]
    async fn create_with_no_text_key_is_400() -> anyhow::Result<()> {
        let response = app()
            .oneshot(summarize_request(serde_json::json!({}))?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
