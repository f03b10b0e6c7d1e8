//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all service settings.
//! Values come from an optional TOML file, then environment overrides.
//! Every field has a default, so the service starts with no file at all.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chat_api::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::resolve(Some(Path::new("config.toml")))?;
//!     config.logging.init(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use super::llm::{BedrockConfig, GatewayConfig, MockConfig};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::domain::GatewayMode;
use crate::error::{ConfigError, Result};

/// Main service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Starting mode.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Live backend.
    #[serde(default)]
    pub bedrock: BedrockConfig,

    /// Canned backend.
    #[serde(default)]
    pub mock: MockConfig,
}

fn parse_env<T: FromStr>(field: &'static str, raw: &str) -> std::result::Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed or
    /// validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` (or start from defaults) and apply process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or an override is invalid.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, then validate.
    ///
    /// Recognized keys: `API_HOST`, `API_PORT`, `LLM_MODE`, `AWS_REGION`,
    /// `BEDROCK_MODEL_ID`, `BEDROCK_MAX_TOKENS`, `BEDROCK_TEMPERATURE`,
    /// `DEFAULT_MODEL_ID`. Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the variable when a value
    /// does not parse, or any validation error.
    #[allow(clippy::result_large_err)]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = read("API_HOST") {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = read("API_PORT") {
            self.server.port = parse_env("API_PORT", &port)?;
        }
        if let Some(mode) = read("LLM_MODE") {
            self.gateway.mode = parse_env::<GatewayMode>("LLM_MODE", &mode)?;
        }
        if let Some(region) = read("AWS_REGION") {
            self.bedrock.region = region.trim().to_string();
        }
        if let Some(model_id) = read("BEDROCK_MODEL_ID") {
            self.bedrock.model_id = model_id.trim().to_string();
        }
        if let Some(max_tokens) = read("BEDROCK_MAX_TOKENS") {
            self.bedrock.max_tokens = parse_env("BEDROCK_MAX_TOKENS", &max_tokens)?;
        }
        if let Some(temperature) = read("BEDROCK_TEMPERATURE") {
            self.bedrock.temperature = parse_env("BEDROCK_TEMPERATURE", &temperature)?;
        }
        if let Some(model_id) = read("DEFAULT_MODEL_ID") {
            self.mock.model_id = model_id.trim().to_string();
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.bedrock.region.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "region" }.into());
        }
        if self.bedrock.model_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model_id" }.into());
        }
        if self.bedrock.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.bedrock.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }
        if self.bedrock.worker_threads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "worker_threads",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(endpoint) = &self.bedrock.endpoint {
            Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue {
                field: "endpoint",
                reason: e.to_string(),
            })?;
        }
        if self.mock.model_id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "mock.model_id",
            }
            .into());
        }
        if self.mock.min_delay_ms > self.mock.max_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "min_delay_ms",
                reason: "must be <= max_delay_ms".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
