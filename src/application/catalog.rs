//! Static model catalog reported by `GET /models`.

use serde::{Deserialize, Serialize};

use crate::domain::GatewayMode;

/// One model the gateway can serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Identifier accepted as `model_id` in requests.
    pub id: String,
    /// Display name.
    pub name: String,
    /// `bedrock` for live models, `dummy` for the mock.
    pub provider: String,
    /// Largest completion the model accepts.
    pub max_tokens: u32,
}

/// Models served in the reported mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelEntry>,
    pub mode: GatewayMode,
}

fn entry(id: &str, name: &str, provider: &str, max_tokens: u32) -> ModelEntry {
    ModelEntry {
        id: id.into(),
        name: name.into(),
        provider: provider.into(),
        max_tokens,
    }
}

/// Describe the models served in `mode`. No provider is queried.
#[must_use]
pub fn catalog_for(mode: GatewayMode) -> ModelCatalog {
    let models = match mode {
        GatewayMode::Live => vec![
            entry(
                "anthropic.claude-3-haiku-20240307-v1:0",
                "Claude 3 Haiku",
                "bedrock",
                4096,
            ),
            entry(
                "anthropic.claude-3-sonnet-20240229-v1:0",
                "Claude 3 Sonnet",
                "bedrock",
                4096,
            ),
        ],
        GatewayMode::Mock => vec![entry(
            "dummy-claude-3-haiku",
            "Claude 3 Haiku (Dummy)",
            "dummy",
            4096,
        )],
    };
    ModelCatalog { models, mode }
}
