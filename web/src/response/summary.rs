use serde::Serialize;
use utoipa::ToSchema;

/// Generated summary returned for a block of text.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}
