//! Response bodies that exist only at the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::domain::GatewayMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub health: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub mode: GatewayMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwitchModeQuery {
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchModeResponse {
    pub message: String,
    pub current_mode: GatewayMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}
