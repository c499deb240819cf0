//! Shared application state for the web server.

use std::sync::Arc;

use biaslens_llm::analysis::AnalysisClient;
use biaslens_llm::backend::LlmBackend;
use biaslens_llm::secondary::SecondaryProvider;
use biaslens_router::selector::ModelSelector;
use biaslens_router::table::CategoryProviderTable;

use crate::config::Config;

/// Shared state injected into every Axum handler. The routing table behind
/// the selector is built once here and never mutated.
pub struct AppState {
    pub config: Config,
    pub analysis: AnalysisClient,
    pub secondary: Arc<dyn SecondaryProvider>,
    pub selector: ModelSelector,
}

impl AppState {
    pub fn new(
        config: Config,
        primary: Arc<dyn LlmBackend>,
        secondary: Arc<dyn SecondaryProvider>,
    ) -> Self {
        Self {
            config,
            analysis: AnalysisClient::new(primary),
            secondary,
            selector: ModelSelector::new(CategoryProviderTable::new()),
        }
    }
}

pub type SharedState = Arc<AppState>;
