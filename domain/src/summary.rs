//! Business logic for summarizing meeting notes.

use crate::error::{DomainErrorKind, Error};
use crate::gateway::openai::OpenAiClient;
use log::*;
use service::config::Config;

/// Produce a short summary of `text`.
///
/// Empty or whitespace-only input is rejected before any network call is made.
pub async fn create(config: &Config, text: &str) -> Result<String, Error> {
    if text.trim().is_empty() {
        info!("Rejecting summary request with empty text");
        return Err(Error {
            source: None,
            error_kind: DomainErrorKind::Validation("Le texte à résumer est requis.".to_string()),
        });
    }

    let openai_client = OpenAiClient::new(config)?;
    let summary = openai_client.summarize(text).await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serial_test::serial;
    use std::env;

    fn create_config_with_mock(server_url: &str) -> Config {
        env::set_var("OPENAI_API_KEY", "test_api_key_123");
        env::set_var("OPENAI_BASE_URL", server_url);
        Config::default()
    }

    #[tokio::test]
    #[serial]
    async fn create_returns_the_generated_summary() {
        let mut server = Server::new_async().await;
        let config = create_config_with_mock(&server.url());

        let _mock = server
            .mock("POST", "/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"text":"\nUn résumé concis."}]}"#)
            .create_async()
            .await;

        let summary = create(&config, "Compte rendu de la réunion du lundi.")
            .await
            .unwrap();

        assert_eq!(summary, "Un résumé concis.");
    }

    #[tokio::test]
    #[serial]
    async fn create_rejects_whitespace_only_text_before_any_api_call() {
        let mut server = Server::new_async().await;
        let config = create_config_with_mock(&server.url());

        let mock = server
            .mock("POST", "/completions")
            .expect(0)
            .create_async()
            .await;

        let result = create(&config, "   \n\t").await;

        match result.unwrap_err().error_kind {
            DomainErrorKind::Validation(message) => {
                assert_eq!(message, "Le texte à résumer est requis.");
            }
            other => panic!("Expected a validation error, got: {:?}", other),
        }
        mock.assert_async().await;
    }
}
