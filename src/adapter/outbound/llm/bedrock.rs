//! Amazon Bedrock backend (Anthropic Claude messages schema).
//!
//! Serializes requests into the Bedrock/Anthropic body, runs the blocking
//! [`ModelInvoker`] on a bounded set of blocking worker threads and maps the
//! raw response into gateway results.
//!
//! Response handling is split in three stages so failures stay classified:
//! bytes that are not UTF-8 or not JSON are a decode error, JSON missing the
//! expected fields (or with an empty `content` array) is a shape error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::application::prompt::{self, PLACEHOLDER_MARKET_CONTEXT};
use crate::application::state::{GatewaySettings, InvocationParams};
use crate::domain::{
    ChatMessage, ConversationRequest, ConversationResult, GenerationRequest, GenerationResult,
    Role, Usage,
};
use crate::error::{GatewayError, GatewayResult};
use crate::port::outbound::invoker::ModelInvoker;
use crate::port::outbound::llm::Llm;

/// Anthropic schema version required by Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Serialize)]
struct InvokeBody<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Deserialize)]
struct InvokeResponse {
    content: Vec<ContentBlock>,
    usage: WireUsage,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Deserialize)]
struct WireUsage {
    input_tokens: u64,
    output_tokens: u64,
}

/// First text block and usage extracted from a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Extract the first content block and usage from a raw response body.
///
/// # Errors
///
/// [`GatewayError::Decode`] when the body is not UTF-8 or not JSON,
/// [`GatewayError::ResponseShape`] when the JSON lacks `content[0].text` or
/// `usage`.
pub fn parse_response(body: &[u8]) -> GatewayResult<Completion> {
    let text = std::str::from_utf8(body)
        .map_err(|e| GatewayError::Decode(format!("response body is not valid UTF-8: {e}")))?;
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| GatewayError::Decode(e.to_string()))?;
    let response: InvokeResponse =
        serde_json::from_value(value).map_err(|e| GatewayError::ResponseShape(e.to_string()))?;

    let first = response
        .content
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::ResponseShape("content array is empty".into()))?;

    Ok(Completion {
        text: first.text,
        input_tokens: response.usage.input_tokens,
        output_tokens: response.usage.output_tokens,
    })
}

enum ClientState {
    Ready(Arc<dyn ModelInvoker>),
    Unavailable(String),
}

/// Live adapter: Claude on Bedrock behind a bounded pool of blocking calls.
pub struct BedrockLlm {
    client: ClientState,
    settings: Arc<GatewaySettings>,
    workers: Arc<Semaphore>,
}

impl BedrockLlm {
    /// Create an adapter backed by `invoker`.
    ///
    /// At most `worker_threads` provider calls run at once; further calls
    /// wait for a free slot.
    #[must_use]
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        settings: Arc<GatewaySettings>,
        worker_threads: usize,
    ) -> Self {
        Self {
            client: ClientState::Ready(invoker),
            settings,
            workers: Arc::new(Semaphore::new(worker_threads.max(1))),
        }
    }

    /// Create an adapter whose client failed to initialize.
    ///
    /// Every call fails with [`GatewayError::DependencyUnavailable`].
    #[must_use]
    pub fn unavailable(reason: impl Into<String>, settings: Arc<GatewaySettings>) -> Self {
        Self {
            client: ClientState::Unavailable(reason.into()),
            settings,
            workers: Arc::new(Semaphore::new(1)),
        }
    }

    fn invoker(&self) -> GatewayResult<Arc<dyn ModelInvoker>> {
        match &self.client {
            ClientState::Ready(invoker) => Ok(Arc::clone(invoker)),
            ClientState::Unavailable(reason) => Err(GatewayError::DependencyUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    fn params(
        &self,
        model_id: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f64>,
    ) -> InvocationParams {
        self.settings
            .live_defaults()
            .resolve(model_id, max_tokens, temperature)
    }

    /// Serialize, send on a blocking worker and parse the response.
    async fn complete(
        &self,
        params: &InvocationParams,
        messages: Vec<WireMessage<'_>>,
    ) -> GatewayResult<Completion> {
        let invoker = self.invoker()?;

        let body = serde_json::to_vec(&InvokeBody {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            messages,
        })
        .map_err(|e| GatewayError::transport(format!("failed to encode request: {e}")))?;

        let permit = Arc::clone(&self.workers)
            .acquire_owned()
            .await
            .map_err(|_| GatewayError::transport("worker pool is closed"))?;

        debug!(
            provider = invoker.name(),
            model_id = %params.model_id,
            max_tokens = params.max_tokens,
            body_bytes = body.len(),
            "Invoking model"
        );

        let model_id = params.model_id.clone();
        let raw = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            invoker.invoke_model(&model_id, &body)
        })
        .await
        .map_err(|e| GatewayError::transport(format!("worker thread failed: {e}")))??;

        parse_response(&raw)
    }
}

#[async_trait]
impl Llm for BedrockLlm {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn generate_text(&self, request: GenerationRequest) -> GatewayResult<GenerationResult> {
        let params = self.params(
            request.model_id.as_deref(),
            request.max_tokens,
            request.temperature,
        );
        let prompt = prompt::render(&request.prompt, PLACEHOLDER_MARKET_CONTEXT);
        let messages = vec![WireMessage {
            role: Role::User,
            content: &prompt,
        }];

        let completion = self.complete(&params, messages).await.inspect_err(|e| {
            warn!(kind = e.kind(), error = %e, model_id = %params.model_id, "Bedrock generation failed");
        })?;

        Ok(GenerationResult {
            text: completion.text,
            model_id: params.model_id,
            usage: Usage::completion(completion.input_tokens, completion.output_tokens),
        })
    }

    async fn chat(&self, request: ConversationRequest) -> GatewayResult<ConversationResult> {
        let params = self.params(
            request.model_id.as_deref(),
            request.max_tokens,
            request.temperature,
        );
        let messages = request
            .messages
            .iter()
            .map(|m| WireMessage {
                role: m.role,
                content: &m.content,
            })
            .collect();

        let completion = self.complete(&params, messages).await.inspect_err(|e| {
            warn!(kind = e.kind(), error = %e, model_id = %params.model_id, "Bedrock chat failed");
        })?;

        Ok(ConversationResult {
            message: ChatMessage::assistant(completion.text),
            model_id: params.model_id,
            usage: Usage::conversation(
                completion.input_tokens,
                completion.output_tokens,
                request.messages.len() as u64,
            ),
        })
    }
}
