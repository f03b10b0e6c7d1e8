//! Backend selection.
//!
//! The [`Gateway`] owns one instance of each adapter and picks one per call
//! from the current [`GatewayMode`]. It adds no caching, no retries and no
//! fallback from one adapter to the other.

use std::sync::Arc;

use tracing::info;

use super::catalog::{catalog_for, ModelCatalog};
use super::state::GatewaySettings;
use crate::domain::{
    ConversationRequest, ConversationResult, GatewayMode, GenerationRequest, GenerationResult,
};
use crate::error::{GatewayError, GatewayResult};
use crate::port::outbound::llm::Llm;

/// Routes each call to the mock or live adapter by the current mode.
pub struct Gateway {
    settings: Arc<GatewaySettings>,
    mock: Arc<dyn Llm>,
    live: Arc<dyn Llm>,
}

impl Gateway {
    #[must_use]
    pub fn new(settings: Arc<GatewaySettings>, mock: Arc<dyn Llm>, live: Arc<dyn Llm>) -> Self {
        Self {
            settings,
            mock,
            live,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GatewayMode {
        self.settings.mode()
    }

    /// Adapter serving `mode`.
    #[must_use]
    pub fn adapter_for(&self, mode: GatewayMode) -> Arc<dyn Llm> {
        match mode {
            GatewayMode::Mock => Arc::clone(&self.mock),
            GatewayMode::Live => Arc::clone(&self.live),
        }
    }

    /// Adapter serving the current mode.
    #[must_use]
    pub fn select(&self) -> Arc<dyn Llm> {
        self.adapter_for(self.mode())
    }

    /// Parse `raw` and make it the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidArgument`] when `raw` names no known
    /// mode; the current mode is left unchanged.
    pub fn set_mode(&self, raw: &str) -> GatewayResult<GatewayMode> {
        let mode = raw
            .parse::<GatewayMode>()
            .map_err(|e| GatewayError::InvalidArgument(e.to_string()))?;
        let previous = self.settings.replace_mode(mode);
        info!(from = %previous, to = %mode, "Gateway mode switched");
        Ok(mode)
    }

    pub async fn generate_text(
        &self,
        request: GenerationRequest,
    ) -> GatewayResult<GenerationResult> {
        self.select().generate_text(request).await
    }

    pub async fn chat(&self, request: ConversationRequest) -> GatewayResult<ConversationResult> {
        self.select().chat(request).await
    }

    #[must_use]
    pub fn catalog(&self) -> ModelCatalog {
        catalog_for(self.mode())
    }
}
