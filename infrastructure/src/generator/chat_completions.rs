//! Chat-completions generator adapter
//!
//! Implements the [`TextGenerator`] port over HTTP with `reqwest`.

use super::protocol::{ChatMessage, ChatRequest, parse_completion};
use async_trait::async_trait;
use drlegal_application::{GenerationError, SamplingParams, TextGenerator};
use drlegal_domain::GenerationRequest;
use std::time::Duration;
use tracing::{debug, info};

/// Resolved generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Bearer credential. `None` disables generation.
    pub api_key: Option<String>,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Generator backed by an OpenAI-compatible endpoint.
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    settings: GeneratorSettings,
}

impl ChatCompletionsGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::ConnectionError(format!("HTTP client setup: {}", e)))?;

        if settings.api_key.is_some() {
            info!(model = %settings.model, "Generator configured");
        }

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    fn has_credential(&self) -> bool {
        self.settings
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        params: SamplingParams,
    ) -> Result<String, GenerationError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let user_prompt = request.user_prompt();
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_directive,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        debug!(endpoint = %self.endpoint(), "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::ConnectionError(format!("Failed to read body: {}", e)))?;

        parse_completion(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_credential() {
        let without = ChatCompletionsGenerator::new(GeneratorSettings::default()).unwrap();
        assert!(!without.has_credential());

        let blank = ChatCompletionsGenerator::new(GeneratorSettings {
            api_key: Some("   ".to_string()),
            ..GeneratorSettings::default()
        })
        .unwrap();
        assert!(!blank.has_credential());

        let with = ChatCompletionsGenerator::new(GeneratorSettings {
            api_key: Some("gsk_test".to_string()),
            ..GeneratorSettings::default()
        })
        .unwrap();
        assert!(with.has_credential());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let generator = ChatCompletionsGenerator::new(GeneratorSettings {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..GeneratorSettings::default()
        })
        .unwrap();
        assert_eq!(generator.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_generate_without_credential_fails_fast() {
        let generator = ChatCompletionsGenerator::new(GeneratorSettings::default()).unwrap();
        let err = generator
            .generate(
                &GenerationRequest::new("x"),
                SamplingParams {
                    max_tokens: 10,
                    temperature: 0.1,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let generator = ChatCompletionsGenerator::new(GeneratorSettings {
            api_key: Some("gsk_test".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            ..GeneratorSettings::default()
        })
        .unwrap();
        let err = generator
            .generate(
                &GenerationRequest::new("x"),
                SamplingParams {
                    max_tokens: 10,
                    temperature: 0.1,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::ConnectionError(_) | GenerationError::Timeout
        ));
    }
}
