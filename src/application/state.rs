//! Shared gateway settings.
//!
//! Holds the only runtime-mutable value in the service, the [`GatewayMode`],
//! next to the generation defaults the adapters resolve on every call.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::domain::GatewayMode;

/// Provider defaults substituted for absent request fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefaults {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Parameters after request values and defaults have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationParams {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ModelDefaults {
    /// Prefer request values; fall back to these defaults for absent ones.
    #[must_use]
    pub fn resolve(
        &self,
        model_id: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f64>,
    ) -> InvocationParams {
        InvocationParams {
            model_id: model_id.unwrap_or(&self.model_id).to_string(),
            max_tokens: max_tokens.unwrap_or(self.max_tokens),
            temperature: temperature.unwrap_or(self.temperature),
        }
    }
}

/// Configuration holder passed to the gateway and its adapters.
///
/// The mode is a single atomic cell: readers never observe a torn value and
/// a switch is one atomic swap.
#[derive(Debug)]
pub struct GatewaySettings {
    mode: AtomicU8,
    live: ModelDefaults,
    mock_model_id: String,
}

impl GatewaySettings {
    #[must_use]
    pub fn new(mode: GatewayMode, live: ModelDefaults, mock_model_id: impl Into<String>) -> Self {
        Self {
            mode: AtomicU8::new(mode.to_u8()),
            live,
            mock_model_id: mock_model_id.into(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> GatewayMode {
        GatewayMode::from_u8(self.mode.load(Ordering::Acquire))
    }

    /// Store `mode` and return the previous one.
    pub fn replace_mode(&self, mode: GatewayMode) -> GatewayMode {
        GatewayMode::from_u8(self.mode.swap(mode.to_u8(), Ordering::AcqRel))
    }

    #[must_use]
    pub fn live_defaults(&self) -> &ModelDefaults {
        &self.live
    }

    #[must_use]
    pub fn mock_model_id(&self) -> &str {
        &self.mock_model_id
    }
}
