//! Integration tests against Amazon Bedrock.
//!
//! These tests require real AWS credentials and network access.
//!
//! # Running Integration Tests
//!
//! Gated behind the `integration-tests` feature flag and marked `#[ignore]`:
//!
//! ```bash
//! export AWS_PROFILE="..."   # or AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY
//! export AWS_REGION="us-east-1"
//! cargo test --features integration-tests -- --ignored
//! ```
//!
//! # Cost Considerations
//!
//! The tests use Claude 3 Haiku with short prompts and small token limits,
//! but still incur small charges.

#![cfg(feature = "integration-tests")]

use std::sync::Arc;
use std::time::Duration;

use chat_api::adapter::outbound::bedrock::{BedrockClient, ClientOptions};
use chat_api::adapter::outbound::llm::bedrock::BedrockLlm;
use chat_api::application::state::{GatewaySettings, ModelDefaults};
use chat_api::domain::{ChatMessage, ConversationRequest, GatewayMode, GenerationRequest};
use chat_api::port::outbound::llm::Llm;

const MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

fn region() -> String {
    std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string())
}

async fn create_client() -> Option<BedrockClient> {
    let options = ClientOptions {
        region: region(),
        endpoint: None,
        timeout: Some(Duration::from_secs(60)),
    };
    BedrockClient::connect(&options)
        .await
        .map_err(|e| eprintln!("Skipping Bedrock test: {e}"))
        .ok()
}

fn settings() -> Arc<GatewaySettings> {
    Arc::new(GatewaySettings::new(
        GatewayMode::Live,
        ModelDefaults {
            model_id: MODEL.into(),
            max_tokens: 64,
            temperature: 0.0,
        },
        "dummy-claude-3-haiku",
    ))
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires AWS credentials and network access"]
async fn generate_returns_text_and_usage() {
    let Some(client) = create_client().await else {
        return;
    };
    let llm = BedrockLlm::new(Arc::new(client), settings(), 2);

    let result = llm
        .generate_text(
            GenerationRequest::new("Define liquidity in one sentence.").with_max_tokens(Some(64)),
        )
        .await
        .expect("API call failed");

    assert!(!result.text.is_empty());
    assert!(result.usage.input_tokens > 0);
    assert_eq!(
        result.usage.total_tokens,
        Some(result.usage.input_tokens + result.usage.output_tokens)
    );
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires AWS credentials and network access"]
async fn chat_keeps_history() {
    let Some(client) = create_client().await else {
        return;
    };
    let llm = BedrockLlm::new(Arc::new(client), settings(), 2);

    let request = ConversationRequest::new(vec![
        ChatMessage::user("My favourite ticker is AAPL. Reply OK."),
        ChatMessage::assistant("OK"),
        ChatMessage::user("Which ticker did I mention? Answer with the ticker only."),
    ])
    .with_max_tokens(Some(16));
    let result = llm.chat(request).await.expect("API call failed");

    assert!(result.message.content.contains("AAPL"));
    assert_eq!(result.usage.conversation_turns, Some(3));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires AWS credentials and network access"]
async fn claude_models_are_listed() {
    let Some(client) = create_client().await else {
        return;
    };
    let models = client
        .list_foundation_models()
        .await
        .expect("listing failed");
    assert!(models.iter().any(|m| m.is_claude()));
}
