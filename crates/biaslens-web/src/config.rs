//! Configuration loading for biaslens.
//! Reads biaslens.toml from the current directory or path in BIASLENS_CONFIG env var.

use std::path::Path;

use biaslens_common::{BiaslensError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Primary analysis model (local Ollama endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Probe the model at startup and fail the process when it errors.
    #[serde(default)]
    pub warm_up: bool,
}

fn default_base_url() -> String { "http://localhost:11434".to_string() }
fn default_model() -> String { "llama3.2".to_string() }

impl Default for LlmConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), model: default_model(), warm_up: false }
    }
}

/// Downstream providers the router can name. Keys are resolved from the
/// environment at routing time; entries without a wired-up client keep
/// placeholder env-var names only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_openai")]
    pub openai: ProviderConfig,
    #[serde(default = "default_anthropic")]
    pub anthropic: ProviderConfig,
    #[serde(default = "default_gemini")]
    pub gemini: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai: default_openai(),
            anthropic: default_anthropic(),
            gemini: default_gemini(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key_env: String,
    pub model: String,
}

fn default_openai() -> ProviderConfig {
    ProviderConfig {
        api_key_env: "OPENAI_API_KEY".to_string(),
        model: "gpt-4".to_string(),
    }
}

fn default_anthropic() -> ProviderConfig {
    ProviderConfig {
        api_key_env: "ANTHROPIC_API_KEY_PLACEHOLDER".to_string(),
        model: "claude-3-5-sonnet-latest".to_string(),
    }
}

fn default_gemini() -> ProviderConfig {
    ProviderConfig {
        api_key_env: "GEMINI_API_KEY_PLACEHOLDER".to_string(),
        model: "gemini-1.5-pro".to_string(),
    }
}

impl Config {
    /// Load configuration from biaslens.toml.
    /// Checks BIASLENS_CONFIG env var first, then the current directory.
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let path = std::env::var("BIASLENS_CONFIG")
            .unwrap_or_else(|_| "biaslens.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::info!(path = %path, "no config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| BiaslensError::Config(format!("failed to read {path}: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| BiaslensError::Config(format!("failed to parse {path}: {e}")))?;
        Ok(config)
    }
}
