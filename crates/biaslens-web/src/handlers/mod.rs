pub mod analyze;
pub mod health;
pub mod route;

use serde::Deserialize;

/// Request body shared by the analysis and routing endpoints.
#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}
