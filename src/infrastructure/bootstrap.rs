//! Composition root: builds the gateway and its adapters from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::bedrock::{BedrockClient, ClientOptions};
use crate::adapter::outbound::llm::bedrock::BedrockLlm;
use crate::adapter::outbound::llm::mock::{DelayRange, MockLlm};
use crate::application::gateway::Gateway;
use crate::application::state::{GatewaySettings, ModelDefaults};
use crate::error::GatewayResult;
use crate::infrastructure::config::llm::BedrockConfig;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Shared settings holder seeded from configuration.
#[must_use]
pub fn build_settings(config: &Config) -> Arc<GatewaySettings> {
    Arc::new(GatewaySettings::new(
        config.gateway.mode,
        ModelDefaults {
            model_id: config.bedrock.model_id.clone(),
            max_tokens: config.bedrock.max_tokens,
            temperature: config.bedrock.temperature,
        },
        config.mock.model_id.clone(),
    ))
}

#[must_use]
pub fn build_mock(config: &Config, settings: Arc<GatewaySettings>) -> Arc<dyn Llm> {
    let delay = DelayRange::from_millis(config.mock.min_delay_ms, config.mock.max_delay_ms);
    Arc::new(MockLlm::new(settings, delay))
}

/// SDK connection options for the configured region, endpoint and timeout.
#[must_use]
pub fn client_options(config: &BedrockConfig) -> ClientOptions {
    ClientOptions {
        region: config.region.clone(),
        endpoint: config.endpoint.clone(),
        timeout: config.request_timeout(),
    }
}

/// Connect to Bedrock with the default AWS credential chain.
///
/// # Errors
///
/// Returns [`GatewayError::DependencyUnavailable`](crate::error::GatewayError::DependencyUnavailable)
/// when no credentials can be resolved.
pub async fn connect_bedrock(config: &BedrockConfig) -> GatewayResult<BedrockClient> {
    BedrockClient::connect(&client_options(config)).await
}

/// Build the live adapter. Never fails: a client that cannot be built
/// yields an adapter whose calls fail with `DependencyUnavailable`.
pub async fn build_live(config: &Config, settings: Arc<GatewaySettings>) -> Arc<dyn Llm> {
    match connect_bedrock(&config.bedrock).await {
        Ok(client) => {
            info!(
                region = %config.bedrock.region,
                model_id = %config.bedrock.model_id,
                workers = config.bedrock.worker_threads,
                "Bedrock client initialized"
            );
            Arc::new(BedrockLlm::new(
                Arc::new(client),
                settings,
                config.bedrock.worker_threads,
            ))
        }
        Err(e) => {
            warn!(error = %e, "Bedrock client unavailable; live mode calls will fail");
            Arc::new(BedrockLlm::unavailable(e.to_string(), settings))
        }
    }
}

/// Wire settings and both adapters into a gateway.
pub async fn build_gateway(config: &Config) -> Arc<Gateway> {
    let settings = build_settings(config);
    let mock = build_mock(config, Arc::clone(&settings));
    let live = build_live(config, Arc::clone(&settings)).await;
    info!(mode = %settings.mode(), "Gateway ready");
    Arc::new(Gateway::new(settings, mock, live))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GatewayMode, GenerationRequest};

    fn zero_delay_config() -> Config {
        let mut config = Config::default();
        config.mock.min_delay_ms = 0;
        config.mock.max_delay_ms = 0;
        config
    }

    #[test]
    fn client_options_follow_bedrock_section() {
        let config = BedrockConfig {
            region: "eu-west-1".into(),
            endpoint: Some("http://localhost:4566".into()),
            request_timeout_secs: Some(30),
            ..BedrockConfig::default()
        };
        let options = client_options(&config);
        assert_eq!(options.region, "eu-west-1");
        assert_eq!(options.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(options.timeout, Some(std::time::Duration::from_secs(30)));
    }

    #[test]
    fn default_client_options_have_no_timeout_or_endpoint() {
        let options = client_options(&BedrockConfig::default());
        assert_eq!(options.region, "us-east-1");
        assert!(options.endpoint.is_none());
        assert!(options.timeout.is_none());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.gateway.mode = GatewayMode::Live;
        config.bedrock.max_tokens = 123;
        let settings = build_settings(&config);
        assert_eq!(settings.mode(), GatewayMode::Live);
        assert_eq!(settings.live_defaults().max_tokens, 123);
        assert_eq!(settings.mock_model_id(), "dummy-claude-3-haiku");
    }

    #[tokio::test]
    async fn mock_adapter_is_wired_with_configured_model() {
        let config = zero_delay_config();
        let mock = build_mock(&config, build_settings(&config));
        let result = mock.generate_text(GenerationRequest::new("hi")).await.unwrap();
        assert_eq!(result.model_id, "dummy-claude-3-haiku");
    }
}
