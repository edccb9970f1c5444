//! HTTP clients for the third party APIs the platform depends on.

pub mod deepgram;
pub mod openai;
