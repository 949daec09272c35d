//! Faucet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the faucet client.
///
/// Can be loaded from a TOML file via [`FaucetConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Resolved once at startup and
/// passed into the form controller and claim client explicitly; nothing
/// reads the environment ambiently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaucetConfig {
    /// Base URL of the claim service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site key for the human-verification widget.
    ///
    /// `None` runs the faucet in the variant without verification: no
    /// challenge gating and no verification token on requests.
    #[serde(default)]
    pub site_key: Option<String>,

    /// Overall request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl FaucetConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("FaucetConfig is always serializable to TOML")
    }

    /// Whether submissions must be gated behind a human-verification
    /// challenge.
    pub fn verification_required(&self) -> bool {
        self.site_key.is_some()
    }
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
