use serde::Deserialize;
use utoipa::ToSchema;

/// Body of a meeting creation request.
///
/// Every field is optional at the serde level so the handler can answer a
/// missing field with a 400 and a message instead of a deserialization
/// rejection. Presence is the only validation applied.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingParams {
    pub subject: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub participant_count: Option<i32>,
}
