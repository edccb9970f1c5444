//! Deepgram API client for speech to text.
//!
//! This module provides an HTTP client for interacting with the Deepgram API
//! to transcribe uploaded meeting audio in French.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use serde::Deserialize;
use service::config::Config;

/// Response from the pre-recorded listen endpoint, reduced to the fields we read
#[derive(Debug, Deserialize)]
pub struct ListenResponse {
    pub results: ListenResults,
}

#[derive(Debug, Deserialize)]
pub struct ListenResults {
    pub channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
pub struct Alternative {
    pub transcript: String,
}

/// Deepgram API client
pub struct DeepgramClient {
    client: reqwest::Client,
    base_url: String,
}

impl DeepgramClient {
    /// Create a new Deepgram client with authentication
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = build_client(config)?;
        let base_url = config.deepgram_base_url().to_string();

        Ok(Self { client, base_url })
    }

    /// Transcribe a single pre-recorded audio file.
    ///
    /// The audio bytes are posted to the listen endpoint with French as the source
    /// language and punctuation enabled. Returns the transcript of the first
    /// alternative of the first channel, which is all the API produces for a
    /// single file upload.
    pub async fn transcribe(&self, audio: Vec<u8>, content_type: &str) -> Result<String, Error> {
        let url = format!("{}/listen", self.base_url);

        debug!("Sending {} bytes of audio to Deepgram", audio.len());

        let response = self
            .client
            .post(&url)
            .query(&[
                ("language", "fr"),
                ("punctuate", "true"),
                ("redact", "false"),
            ])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(audio)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send audio to Deepgram: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        if response.status().is_success() {
            let listen: ListenResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Deepgram response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from Deepgram".to_string(),
                    )),
                }
            })?;

            let transcript = listen
                .results
                .channels
                .first()
                .and_then(|channel| channel.alternatives.first())
                .map(|alternative| alternative.transcript.clone())
                .ok_or_else(|| {
                    warn!("Deepgram response contained no transcript alternatives");
                    Error {
                        source: None,
                        error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                            "Invalid response from Deepgram".to_string(),
                        )),
                    }
                })?;

            info!(
                "Deepgram returned a transcript of {} characters",
                transcript.len()
            );
            Ok(transcript)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("Deepgram API: {}", error_text);
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

/// Build authentication headers for the Deepgram API
fn build_auth_headers(config: &Config) -> Result<reqwest::header::HeaderMap, Error> {
    let api_key = config.deepgram_api_key().ok_or_else(|| {
        warn!("Failed to get Deepgram API key from config");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let mut headers = reqwest::header::HeaderMap::new();
    // Deepgram uses the "Token" scheme rather than "Bearer".
    let auth_value = format!("Token {}", api_key);
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

    Ok(headers)
}

/// Guess the MIME type of an uploaded audio file from its extension.
///
/// Deepgram sniffs most containers on its own, so an unknown extension falls back
/// to `audio/mpeg` rather than failing the upload.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("webm") => "audio/webm",
        _ => "audio/mpeg",
    }
}
