//! biaslens-router — category→provider routing core.
//!
//! Probability normalization, highest-category scan, the static
//! category→provider table and the model selector.

pub mod score;
pub mod selector;
pub mod table;

pub use score::{
    highest_category, normalize_analysis, normalize_probability, normalized_highest,
    HighestCategory,
};
pub use selector::{ModelSelector, RoutingDecision};
pub use table::{CategoryProviderTable, ProviderEntry, DEFAULT_PROVIDER};
