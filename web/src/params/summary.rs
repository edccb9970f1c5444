use serde::Deserialize;
use utoipa::ToSchema;

/// Body of a summarization request. A missing `text` key is treated the same
/// as an empty one so the handler can report it as a validation error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummarizeParams {
    #[serde(default)]
    pub text: String,
}
