//! Backend configuration.
//!
//! `[gateway]` picks the starting mode, `[bedrock]` configures the live
//! backend and `[mock]` the canned one. AWS credentials are never read from
//! the file; the SDK default provider chain resolves them at startup.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::GatewayMode;

/// Gateway-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Mode served at startup. Accepts `mock`, `live` and the legacy
    /// `dummy`/`bedrock` names. Defaults to `mock`.
    #[serde(default)]
    pub mode: GatewayMode,
}

/// Amazon Bedrock settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BedrockConfig {
    /// AWS region. Defaults to `us-east-1`.
    #[serde(default = "default_region")]
    pub region: String,

    /// Model used when a request names none.
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Substituted when a request sets `max_tokens` to null. Defaults to 4096.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Substituted when a request sets `temperature` to null. Defaults to 0.7.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Override of the runtime endpoint URL, e.g. a VPC endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Blocking worker threads available to provider calls.
    ///
    /// Defaults to the number of CPUs, at least 2.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

fn default_region() -> String {
    "us-east-1".into()
}

fn default_model_id() -> String {
    "anthropic.claude-3-haiku-20240307-v1:0".into()
}

const fn default_max_tokens() -> u32 {
    4096
}

const fn default_temperature() -> f64 {
    0.7
}

fn default_worker_threads() -> usize {
    num_cpus::get().max(2)
}

impl BedrockConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            model_id: default_model_id(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            endpoint: None,
            request_timeout_secs: None,
            worker_threads: default_worker_threads(),
        }
    }
}

/// Canned backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// Reported model id when a request names none.
    #[serde(default = "default_mock_model_id")]
    pub model_id: String,

    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_mock_model_id() -> String {
    "dummy-claude-3-haiku".into()
}

const fn default_min_delay_ms() -> u64 {
    500
}

const fn default_max_delay_ms() -> u64 {
    2000
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            model_id: default_mock_model_id(),
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}
