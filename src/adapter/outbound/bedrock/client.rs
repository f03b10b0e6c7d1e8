//! Bedrock access through the AWS SDK.
//!
//! Credentials, region and signing come from the SDK's default provider
//! chain (environment, shared profile, SSO, container or instance role).

use std::fmt;
use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::primitives::Blob;
use tokio::runtime::Handle;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::port::outbound::invoker::ModelInvoker;

/// A model listed by the Bedrock control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationModel {
    pub model_id: String,
    pub model_name: Option<String>,
    pub provider_name: Option<String>,
}

impl FoundationModel {
    #[must_use]
    pub fn is_claude(&self) -> bool {
        self.model_id.to_lowercase().contains("claude")
    }
}

/// Connection settings for [`BedrockClient::connect`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// AWS region, e.g. `us-east-1`.
    pub region: String,
    /// Runtime endpoint override, e.g. a VPC endpoint.
    pub endpoint: Option<String>,
    /// Whole-operation timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Runtime and control plane clients sharing one SDK configuration.
///
/// The [`ModelInvoker`] implementation blocks the calling thread until the
/// SDK future completes on the runtime captured at connect time, so it must
/// be called from a blocking worker thread.
#[derive(Clone)]
pub struct BedrockClient {
    runtime: aws_sdk_bedrockruntime::Client,
    control: aws_sdk_bedrock::Client,
    handle: Handle,
}

impl fmt::Debug for BedrockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockClient").finish_non_exhaustive()
    }
}

impl BedrockClient {
    /// Load the SDK configuration and resolve credentials once.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DependencyUnavailable`] when no credentials
    /// provider is configured or the provider chain yields no credentials.
    pub async fn connect(options: &ClientOptions) -> GatewayResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(options.region.clone()));
        if let Some(timeout) = options.timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }
        let sdk_config = loader.load().await;
        check_credentials(&sdk_config).await?;

        let mut runtime_config = aws_sdk_bedrockruntime::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &options.endpoint {
            runtime_config = runtime_config.endpoint_url(endpoint);
        }

        Ok(Self {
            runtime: aws_sdk_bedrockruntime::Client::from_conf(runtime_config.build()),
            control: aws_sdk_bedrock::Client::new(&sdk_config),
            handle: Handle::current(),
        })
    }

    /// List the foundation models visible to these credentials.
    ///
    /// # Errors
    ///
    /// Same classification as [`ModelInvoker::invoke_model`].
    pub async fn list_foundation_models(&self) -> GatewayResult<Vec<FoundationModel>> {
        let output = self
            .control
            .list_foundation_models()
            .send()
            .await
            .map_err(classify)?;

        Ok(output
            .model_summaries
            .unwrap_or_default()
            .into_iter()
            .map(|summary| FoundationModel {
                model_id: summary.model_id().to_string(),
                model_name: summary.model_name().map(str::to_string),
                provider_name: summary.provider_name().map(str::to_string),
            })
            .collect())
    }
}

async fn check_credentials(config: &SdkConfig) -> GatewayResult<()> {
    let provider = config
        .credentials_provider()
        .ok_or_else(|| GatewayError::DependencyUnavailable {
            reason: "no AWS credentials provider configured".to_string(),
        })?;
    provider
        .provide_credentials()
        .await
        .map(|_| ())
        .map_err(|e| GatewayError::DependencyUnavailable {
            reason: format!("AWS credentials not found: {}", DisplayErrorContext(&e)),
        })
}

impl ModelInvoker for BedrockClient {
    fn name(&self) -> &'static str {
        "bedrock-runtime"
    }

    fn invoke_model(&self, model_id: &str, body: &[u8]) -> GatewayResult<Vec<u8>> {
        let request = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body.to_vec()));

        let output = self.handle.block_on(request.send()).map_err(classify)?;
        debug!(model_id, "Bedrock responded");
        Ok(output.body.into_inner())
    }
}

/// Classify an SDK failure.
///
/// Service errors carry the provider's code and message. Timeouts and
/// dispatch failures are transport errors, as is anything the SDK does not
/// classify further.
pub fn classify<E, R>(error: SdkError<E, R>) -> GatewayError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: fmt::Debug,
{
    match &error {
        SdkError::ServiceError(service) => {
            let err = service.err();
            GatewayError::Provider {
                code: err.code().unwrap_or("Unknown").to_string(),
                message: err
                    .message()
                    .map_or_else(|| err.to_string(), str::to_string),
            }
        }
        SdkError::TimeoutError(_) => GatewayError::Transport {
            message: DisplayErrorContext(&error).to_string(),
            timed_out: true,
        },
        SdkError::DispatchFailure(failure) => GatewayError::Transport {
            timed_out: failure.is_timeout(),
            message: DisplayErrorContext(&error).to_string(),
        },
        _ => GatewayError::transport(DisplayErrorContext(&error).to_string()),
    }
}
