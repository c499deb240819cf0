//! biaslens-common — shared error type and result alias.

pub mod error;

pub use error::{BiaslensError, Result};
