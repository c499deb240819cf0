//! biaslens-llm — LLM backend abstraction layer.
//!
//! Implements the LlmBackend trait, the fixed-prompt bias analysis client
//! and the secondary-provider relay used by the routing layer.

pub mod analysis;
pub mod audit;
pub mod backend;
pub mod secondary;
