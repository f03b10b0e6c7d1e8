//! Inbound generation and conversation requests.
//!
//! `max_tokens` and `temperature` default to 1000 and 0.7 when a field is
//! omitted from the body. An explicit `null` leaves the field unset, and the
//! live adapter then substitutes its configured default at call time.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Request-level default for `max_tokens` when the field is omitted.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Request-level default for `temperature` when the field is omitted.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[allow(clippy::unnecessary_wraps)]
const fn default_max_tokens() -> Option<u32> {
    Some(DEFAULT_MAX_TOKENS)
}

#[allow(clippy::unnecessary_wraps)]
const fn default_temperature() -> Option<f64> {
    Some(DEFAULT_TEMPERATURE)
}

/// Single-prompt text generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl GenerationRequest {
    /// Create a request with the request-level defaults applied.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            model_id: None,
        }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

/// Multi-turn chat request. Messages are chronological, last is most recent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl ConversationRequest {
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            model_id: None,
        }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Most recent message authored by the user, if any.
    #[must_use]
    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == super::message::Role::User)
    }
}
