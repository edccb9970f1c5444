//! HTTP layer of the platform: routing, request/response DTOs and the axum
//! server lifecycle. All domain behavior lives in the `domain` crate; this
//! crate translates HTTP in and out of it.

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use log::*;
use tower_http::cors::CorsLayer;

pub use self::error::{Error, Result};
pub use service::AppState;

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod params;
pub(crate) mod response;
pub mod router;

/// Binds the configured interface/port and serves the API until the process
/// is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = app_state.config.port;
    let server_addr = format!("{interface}:{port}");

    let allowed_origins = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|err| warn!("Skipping invalid allowed origin [{origin}]: {err}"))
                .ok()
        })
        .collect::<Vec<_>>();

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let routes = router::define_routes(app_state).layer(cors_layer);

    let listener = tokio::net::TcpListener::bind(&server_addr).await?;

    info!("Server starting... listening for traffic on http://{server_addr}");

    axum::serve(listener, routes).await
}
