use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures raised by the gateway and its backend adapters.
///
/// The set is closed: every adapter failure is one of these variants, and the
/// HTTP layer maps each variant to exactly one status code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The live backend client could not be constructed.
    #[error("Bedrock client not initialized: {reason}")]
    DependencyUnavailable { reason: String },

    /// The provider rejected the call.
    #[error("Bedrock API error: {code}: {message}")]
    Provider { code: String, message: String },

    /// The response body was not UTF-8 or not valid JSON.
    #[error("Invalid JSON response from Bedrock: {0}")]
    Decode(String),

    /// The response decoded but lacked the expected fields.
    #[error("Unexpected response shape from Bedrock: {0}")]
    ResponseShape(String),

    /// Connectivity, timeout, or any other unclassified failure.
    #[error("Error calling Bedrock: {message}")]
    Transport { message: String, timed_out: bool },

    #[error("{0}")]
    InvalidArgument(String),
}

impl GatewayError {
    /// Stable machine-readable name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DependencyUnavailable { .. } => "dependency_unavailable",
            Self::Provider { .. } => "provider_error",
            Self::Decode(_) => "decode_error",
            Self::ResponseShape(_) => "response_shape_error",
            Self::Transport { .. } => "transport_error",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }

    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            timed_out: false,
        }
    }
}

/// Top-level error returned by CLI commands and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result type returned by gateway and adapter operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
