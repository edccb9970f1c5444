use crate::{AppState, Error};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use domain::{user as UserApi, users};

use log::*;

/// CREATE a new user account with the default role
#[utoipa::path(
    post,
    path = "/register/client",
    request_body = users::Model,
    responses(
        (status = 201, description = "Successfully registered a new account", body = users::Model),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(user_model): Json<users::Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST /register/client for email: {}", user_model.email);

    let user: users::Model = UserApi::register(app_state.db_conn_ref(), user_model).await?;

    debug!("Newly registered user: {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}
