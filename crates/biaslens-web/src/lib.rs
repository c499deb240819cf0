//! biaslens-web — HTTP surface for bias analysis and model routing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
