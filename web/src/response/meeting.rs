use domain::meetings;
use serde::Serialize;
use utoipa::ToSchema;

/// Successful meeting creation payload, echoing the persisted record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateMeetingResponse {
    pub message: String,
    pub meeting: meetings::Model,
}
