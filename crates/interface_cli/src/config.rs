//! CLI configuration
//!
//! Read from `BN_`-prefixed environment variables. Nested register settings
//! use `__` between levels:
//!
//! - `BN_LOG_LEVEL` - trace, debug, info, warn, error (default: warn)
//! - `BN_LOG_FORMAT` - `text` or `json` (default: text)
//! - `BN_REGISTER__SENDER_ID` / `BN_REGISTER__SENDER_TYPE`
//! - `BN_REGISTER__ENDPOINTS__SEARCH_NNI` and the other endpoint keys
//! - `BN_REGISTER__TIMEOUT_SECS`

use serde::Deserialize;

use core_kernel::CoreError;
use domain_lodgement::RegisterClientConfig;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: String,
    /// Remote register settings
    pub register: RegisterClientConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            register: RegisterClientConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("BN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Rejects an unknown log format
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.log_format != "text" && self.log_format != "json" {
            return Err(CoreError::configuration(format!(
                "BN_LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }
        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }
}
