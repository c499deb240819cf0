//! Secondary-provider relay.
//!
//! When routing lands on the default provider, the raw user text (not the
//! bias analysis) is forwarded and only the free-text reply is kept.

use async_trait::async_trait;

use crate::backend::{LlmBackend, LlmError, LlmRequest, Message, OpenAiBackend};

#[async_trait]
pub trait SecondaryProvider: Send + Sync {
    /// Forward raw text to the provider and return only its reply text.
    /// Single call, single failure path; no retry or backoff.
    async fn relay(&self, text: &str) -> Result<String, LlmError>;

    fn provider_name(&self) -> &str;
}

/// OpenAI-backed relay for the "gpt4" provider. The API key is resolved from
/// the process environment on every call, not at startup.
pub struct OpenAiSecondary {
    model: String,
    api_key_env: String,
}

impl OpenAiSecondary {
    pub fn new(model: impl Into<String>, api_key_env: impl Into<String>) -> Self {
        Self { model: model.into(), api_key_env: api_key_env.into() }
    }
}

#[async_trait]
impl SecondaryProvider for OpenAiSecondary {
    async fn relay(&self, text: &str) -> Result<String, LlmError> {
        let api_key = std::env::var(&self.api_key_env).map_err(|_| {
            LlmError::Unavailable(format!("{} is not set in the environment", self.api_key_env))
        })?;

        let backend = OpenAiBackend::new(api_key, &self.model);
        let req = LlmRequest {
            messages: vec![Message::user(text)],
            model: None,
            max_tokens: None,
            temperature: None,
        };
        let resp = backend.complete(req).await?;
        Ok(resp.content)
    }

    fn provider_name(&self) -> &str {
        "gpt4"
    }
}
