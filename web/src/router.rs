use crate::{controller::health_check_controller, params, response, AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::controller::{
    meeting_controller, summary_controller, transcription_controller, user_controller,
    user_session_controller,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Reunion Platform API"
        ),
        paths(
            user_controller::register,
            user_session_controller::login,
            meeting_controller::create,
            transcription_controller::create,
            summary_controller::create,
        ),
        components(
            schemas(
                domain::users::Model,
                domain::meetings::Model,
                params::user_session::LoginParams,
                params::meeting::CreateMeetingParams,
                params::summary::SummarizeParams,
                response::user_session::LoginResponse,
                response::meeting::CreateMeetingResponse,
                response::transcription::TranscriptionResponse,
                response::summary::SummaryResponse,
            )
        ),
        tags(
            (name = "reunion_platform", description = "Meeting planning, transcription and summarization API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(user_routes(app_state.clone()))
        .merge(user_session_routes(app_state.clone()))
        .merge(meeting_routes(app_state.clone()))
        .merge(transcription_routes(app_state.clone()))
        .merge(summary_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

pub fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/register/client", post(user_controller::register))
        .with_state(app_state)
}

pub fn user_session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(user_session_controller::login))
        .with_state(app_state)
}

pub fn meeting_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/meeting/:user_id", post(meeting_controller::create))
        .with_state(app_state)
}

pub fn transcription_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/transcribe", post(transcription_controller::create))
        .layer(DefaultBodyLimit::max(
            transcription_controller::MAX_AUDIO_UPLOAD_BYTES,
        ))
        .with_state(app_state)
}

pub fn summary_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summary_controller::create))
        .with_state(app_state)
}
