pub(crate) mod health_check_controller;
pub(crate) mod meeting_controller;
pub(crate) mod summary_controller;
pub(crate) mod transcription_controller;
pub(crate) mod user_controller;
pub(crate) mod user_session_controller;
