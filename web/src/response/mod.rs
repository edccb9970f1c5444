//! Typed response bodies returned by the endpoint handlers.
//!
//! Each struct here pins down the exact JSON shape a successful response
//! carries, so the contract is visible in one place and documented in the
//! generated OpenAPI output.

pub(crate) mod meeting;
pub(crate) mod summary;
pub(crate) mod transcription;
pub(crate) mod user_session;
