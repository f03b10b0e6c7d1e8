//! Gateway operating mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which backend adapter serves requests.
///
/// The legacy names `dummy` and `bedrock` are accepted as aliases when
/// parsing; output always uses `mock` and `live`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    /// Canned responses after an artificial delay.
    #[default]
    #[serde(alias = "dummy")]
    Mock,
    /// Amazon Bedrock.
    #[serde(alias = "bedrock")]
    Live,
}

impl GatewayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Live => "live",
        }
    }

    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            Self::Mock => 0,
            Self::Live => 1,
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Live,
            _ => Self::Mock,
        }
    }
}

impl fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid mode '{value}'. Must be 'mock' or 'live'")]
pub struct ParseModeError {
    pub value: String,
}

impl FromStr for GatewayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "dummy" => Ok(Self::Mock),
            "live" | "bedrock" => Ok(Self::Live),
            _ => Err(ParseModeError {
                value: s.to_string(),
            }),
        }
    }
}
