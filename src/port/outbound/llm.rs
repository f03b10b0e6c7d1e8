//! Text generation port implemented by the backend adapters.
//!
//! Both the mock and the Bedrock adapter implement [`Llm`], so the gateway
//! can swap one for the other without changing any call site.

use async_trait::async_trait;

use crate::domain::{ConversationRequest, ConversationResult, GenerationRequest, GenerationResult};
use crate::error::GatewayResult;

/// Client for large language model generation and chat.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); the gateway shares a
/// single instance across all in-flight requests.
///
/// # Errors
///
/// Both operations return a [`GatewayError`](crate::error::GatewayError)
/// classified by cause. Nothing is retried.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the backend name for logging.
    fn name(&self) -> &'static str;

    /// Generate text for a single prompt.
    async fn generate_text(&self, request: GenerationRequest) -> GatewayResult<GenerationResult>;

    /// Produce the next assistant turn for a conversation.
    async fn chat(&self, request: ConversationRequest) -> GatewayResult<ConversationResult>;
}
