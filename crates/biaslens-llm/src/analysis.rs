//! Bias analysis client — fixed instruction prompt against the primary model.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::audit::LlmAuditEntry;
use crate::backend::{LlmBackend, LlmError, LlmRequest, Message};

/// Instruction sent to the primary model. The reply must be a JSON object
/// scoring every bias category, naming the highest one, and carrying a short
/// explanatory note.
pub const SYSTEM_PROMPT: &str = r#"Respond only with a JSON object containing probability scores (0-1) for each bias category, including "others" if no listed categories apply. Also include a "highest_probability_category" key, which identifies the category with the highest probability, and a "Note" key for a brief explanation under 20 words:
{
  "demographic": {"probability": float},
  "age": {"probability": float},
  "physical_appearance": {"probability": float},
  "gender": {"probability": float},
  "disability": {"probability": float},
  "socioeconomic_status": {"probability": float},
  "religion": {"probability": float},
  "sexual_orientation": {"probability": float},
  "race": {"probability": float},
  "nationality": {"probability": float},
  "others": {"probability": float},
  "highest_probability_category": {"category": string, "probability": float},
  "Note": "Explanation under 20 words"
}"#;

/// Calls the primary model with the fixed instruction and parses the reply.
pub struct AnalysisClient {
    backend: Arc<dyn LlmBackend>,
}

impl AnalysisClient {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Score `text` against the fixed bias-category schema.
    ///
    /// Sampling is pinned to temperature 0. The reply must parse as a JSON
    /// object; anything else is an `LlmError::InvalidReply`.
    pub async fn analyze(&self, text: &str) -> Result<Value, LlmError> {
        let req = LlmRequest {
            messages: vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(text),
            ],
            model: None,
            max_tokens: None,
            temperature: Some(0.0),
        };

        let started = Instant::now();
        let resp = self.backend.complete(req).await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        LlmAuditEntry::new(
            resp.model.clone(),
            self.backend.name().to_string(),
            resp.prompt_tokens,
            resp.completion_tokens,
            &resp.content,
            latency_ms,
        )
        .log();

        parse_reply(&resp.content)
    }
}

/// Strict parse-or-fail: no fence stripping, no repair attempts.
fn parse_reply(content: &str) -> Result<Value, LlmError> {
    let value: Value = serde_json::from_str(content.trim()).map_err(|e| {
        let snippet: String = content.chars().take(80).collect();
        LlmError::InvalidReply(format!("{e}; reply began: {snippet:?}"))
    })?;
    if !value.is_object() {
        return Err(LlmError::InvalidReply(
            "reply is valid JSON but not an object".to_string(),
        ));
    }
    Ok(value)
}
