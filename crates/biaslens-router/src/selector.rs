//! Model selector — turns a detected category into a routing decision.

use serde::Serialize;

use crate::table::{CategoryProviderTable, DEFAULT_PROVIDER};

/// Routing outcome for one request. Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    pub selected_model: String,
    pub bias_category: String,
    /// Confidence as a one-decimal percentage string.
    pub confidence: String,
    /// Historical accuracy of the provider for this category; `None` when the
    /// category fell back to the default provider.
    pub model_accuracy: Option<u32>,
    pub reason: String,
    /// Free-text reply from the secondary provider, when it was invoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<String>,
}

pub struct ModelSelector {
    table: CategoryProviderTable,
    default_provider: String,
}

impl ModelSelector {
    pub fn new(table: CategoryProviderTable) -> Self {
        Self {
            table,
            default_provider: DEFAULT_PROVIDER.to_string(),
        }
    }

    pub fn with_default_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into();
        self
    }

    /// Select a provider for `category` with the given normalized confidence.
    ///
    /// Unmapped categories fall back to the default provider with no accuracy
    /// figure. A missing category is the caller's concern — routing is then
    /// undetermined rather than an error.
    pub fn select(&self, category: &str, confidence: &str) -> RoutingDecision {
        match self.table.get(category) {
            Some(entry) => {
                tracing::debug!(
                    provider = entry.provider,
                    category,
                    accuracy = entry.accuracy,
                    "category matched routing table"
                );
                RoutingDecision {
                    selected_model: entry.provider.to_string(),
                    bias_category: category.to_string(),
                    confidence: confidence.to_string(),
                    model_accuracy: Some(entry.accuracy),
                    reason: format!(
                        "{} is preferred for {} bias with a historical accuracy of {}%",
                        entry.provider, category, entry.accuracy
                    ),
                    llm_response: None,
                }
            }
            None => RoutingDecision {
                selected_model: self.default_provider.clone(),
                bias_category: category.to_string(),
                confidence: confidence.to_string(),
                model_accuracy: None,
                reason: format!(
                    "category '{}' is not mapped to a provider; falling back to {}",
                    category, self.default_provider
                ),
                llm_response: None,
            },
        }
    }

    /// Whether `provider` is the fallback/default provider, which is also the
    /// one the secondary relay targets.
    pub fn is_default(&self, provider: &str) -> bool {
        provider == self.default_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ModelSelector {
        ModelSelector::new(CategoryProviderTable::new())
    }

    #[test]
    fn test_mapped_category_selects_table_provider() {
        let d = selector().select("gender", "90.0");
        assert_eq!(d.selected_model, "gpt4");
        assert_eq!(d.bias_category, "gender");
        assert_eq!(d.confidence, "90.0");
        assert_eq!(d.model_accuracy, Some(90));
        assert!(d.reason.contains("gpt4"));
        assert!(d.reason.contains("gender"));
        assert!(d.reason.contains("90%"));
        assert!(d.llm_response.is_none());
    }

    #[test]
    fn test_unmapped_category_falls_back_to_default() {
        let d = selector().select("unknown_xyz", "12.5");
        assert_eq!(d.selected_model, "gpt4");
        assert_eq!(d.model_accuracy, None);
        assert!(d.reason.contains("unknown_xyz"));
        assert!(d.reason.contains("not mapped"));
    }

    #[test]
    fn test_custom_default_provider() {
        let s = selector().with_default_provider("claude");
        let d = s.select("unknown_xyz", "1.0");
        assert_eq!(d.selected_model, "claude");
        assert!(s.is_default("claude"));
        assert!(!s.is_default("gpt4"));
    }

    #[test]
    fn test_decision_serializes_without_empty_reply() {
        let d = selector().select("race", "88.0");
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["selected_model"], "claude");
        assert_eq!(v["model_accuracy"], 88);
        assert!(v.get("llm_response").is_none());
    }
}
