use crate::params::user_session::LoginParams;
use crate::response::user_session::LoginResponse;
use crate::{AppState, Error};
use axum::{extract::State, response::IntoResponse, Json};
use domain::{jwt, user as UserApi};
use log::*;

/// Logs the user into the platform and returns a signed bearer token.
///
/// The token embeds the user's id and expires five hours after being issued.
/// The greeting in the response is selected by the account's role.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginParams,
    responses(
        (status = 200, description = "Logs in and returns a bearer token", body = LoginResponse),
        (status = 404, description = "No account exists for this email"),
        (status = 401, description = "Wrong password"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(params): Json<LoginParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST /login for email: {}", params.email);

    let user =
        UserApi::authenticate(app_state.db_conn_ref(), &params.email, &params.password).await?;

    let jwt = jwt::generate_login_token(&app_state.config, user.id)?;

    Ok(Json(LoginResponse {
        message: user.role.greeting().to_string(),
        token: jwt.token,
        user_id: user.id,
    }))
}
