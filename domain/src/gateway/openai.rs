//! OpenAI API client for text summarization.
//!
//! This module provides an HTTP client for interacting with the OpenAI completions
//! API to produce short summaries of meeting notes.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use serde::{Deserialize, Serialize};
use service::config::Config;

/// Completion model used for summaries
const COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
/// Upper bound on the size of a generated summary
const MAX_SUMMARY_TOKENS: u32 = 200;

/// Request to create a completion
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// Response from creating a completion
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

/// OpenAI API client
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client with authentication
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = build_client(config)?;
        let base_url = config.openai_base_url().to_string();

        Ok(Self { client, base_url })
    }

    /// Summarize a block of text with the completions API.
    ///
    /// Returns the text of the first completion choice with surrounding
    /// whitespace trimmed, since the model tends to lead with newlines.
    pub async fn summarize(&self, text: &str) -> Result<String, Error> {
        let url = format!("{}/completions", self.base_url);

        let request = CompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            prompt: format!("Please summarize the following text: {}", text),
            max_tokens: MAX_SUMMARY_TOKENS,
        };

        debug!("Requesting a summary of {} characters of text", text.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send completion request to OpenAI: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        if response.status().is_success() {
            let completion: CompletionResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse OpenAI response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from OpenAI".to_string(),
                    )),
                }
            })?;

            let summary = completion
                .choices
                .first()
                .map(|choice| choice.text.trim().to_string())
                .ok_or_else(|| {
                    warn!("OpenAI response contained no completion choices");
                    Error {
                        source: None,
                        error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                            "Invalid response from OpenAI".to_string(),
                        )),
                    }
                })?;

            info!("OpenAI returned a summary of {} characters", summary.len());
            Ok(summary)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API: {}", error_text);
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(error_text)),
            })
        }
    }
}

fn build_client(config: &Config) -> Result<reqwest::Client, Error> {
    let headers = build_auth_headers(config)?;

    Ok(reqwest::Client::builder()
        .use_rustls_tls()
        .default_headers(headers)
        .build()?)
}

/// Build authentication headers for the OpenAI API
fn build_auth_headers(config: &Config) -> Result<reqwest::header::HeaderMap, Error> {
    let api_key = config.openai_api_key().ok_or_else(|| {
        warn!("Failed to get OpenAI API key from config");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let mut headers = reqwest::header::HeaderMap::new();
    let auth_value = format!("Bearer {}", api_key);
    let mut auth_header = reqwest::header::HeaderValue::from_str(&auth_value).map_err(|err| {
        warn!("Failed to create authorization header value: {err:?}");
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to create authorization header value".to_string(),
            )),
        }
    })?;
    auth_header.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, auth_header);

    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}
