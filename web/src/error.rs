use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
//
// Clients only ever see the status code and the French message below. The
// underlying error (DB detail, upstream API body, IO failure) is logged
// server side and never serialized into the response.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0.error_kind {
            DomainErrorKind::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => (
                        StatusCode::NOT_FOUND,
                        "Ce compte n'existe pas, veuillez vous inscrire.".to_string(),
                    ),
                    EntityErrorKind::Unauthenticated => (
                        StatusCode::UNAUTHORIZED,
                        "Mot de passe incorrect.".to_string(),
                    ),
                    EntityErrorKind::Other(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Une erreur interne est survenue.".to_string(),
                    ),
                },
                InternalErrorKind::Config | InternalErrorKind::Other(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Une erreur interne est survenue.".to_string(),
                ),
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Network => (
                    StatusCode::BAD_GATEWAY,
                    "Le service externe est indisponible.".to_string(),
                ),
                ExternalErrorKind::Other(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Une erreur interne est survenue.".to_string(),
                ),
            },
        };

        if status.is_server_error() {
            error!("Responding with {status}: {:?}", self.0);
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
