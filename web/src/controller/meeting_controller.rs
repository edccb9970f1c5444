use crate::params::meeting::CreateMeetingParams;
use crate::response::meeting::CreateMeetingResponse;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use domain::error::{DomainErrorKind, Error as DomainError};
use domain::{meeting as MeetingApi, meetings, Id};
use log::*;

/// CREATE a new meeting owned by the user id supplied in the path
///
/// The owning user id is stored as given; no check is made that it refers to
/// an existing account.
#[utoipa::path(
    post,
    path = "/meeting/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Id of the user the meeting belongs to")
    ),
    request_body = CreateMeetingParams,
    responses(
        (status = 201, description = "Successfully created a new meeting", body = CreateMeetingResponse),
        (status = 400, description = "A required field is missing"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Path(user_id): Path<Id>,
    Json(params): Json<CreateMeetingParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST /meeting/{user_id}");

    // Presence is the only validation; values are persisted as supplied.
    let (subject, date, time, participant_count) = match (
        params.subject,
        params.date,
        params.time,
        params.participant_count,
    ) {
        (Some(subject), Some(date), Some(time), Some(participant_count)) => {
            (subject, date, time, participant_count)
        }
        _ => {
            info!("Rejecting meeting creation with at least one missing field");
            return Err(Error::from(DomainError {
                source: None,
                error_kind: DomainErrorKind::Validation(
                    "Tous les champs sont obligatoires".to_string(),
                ),
            }));
        }
    };

    let now = chrono::Utc::now();
    let meeting: meetings::Model = MeetingApi::create(
        app_state.db_conn_ref(),
        meetings::Model {
            id: Id::default(),
            subject,
            date,
            time,
            participant_count,
            user_id,
            created_at: now.into(),
            updated_at: now.into(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMeetingResponse {
            message: "Réunion créée avec succès".to_string(),
            meeting,
        }),
    ))
}
