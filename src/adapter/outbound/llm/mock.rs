//! Canned-response backend.
//!
//! Used when no live backend is configured. Responses are drawn at random
//! from a fixed set of financial sentences after an artificial delay; the
//! delay suspends only the calling task.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::application::state::GatewaySettings;
use crate::domain::{
    word_count, ChatMessage, ConversationRequest, ConversationResult, GenerationRequest,
    GenerationResult, Usage,
};
use crate::error::GatewayResult;
use crate::port::outbound::llm::Llm;

const FINANCIAL_RESPONSES: &[&str] = &[
    "As a financial AI analyst, I can help you with market analysis, asset valuation and investment strategies.",
    "The NASDAQ market shows interesting trends. Are you interested in any specific sector?",
    "For fundamental analysis, we would need to review the company's financial statements.",
    "Risk metrics are essential for a balanced portfolio. What's your risk profile?",
    "Technical indicators suggest several patterns. Do you want to analyze any specific asset?",
];

const GREETING_REPLY: &str = "Hello! I'm your financial AI assistant. How can I help you today?";
const THANKS_REPLY: &str = "You're welcome! I'm here to help you with any financial queries.";

/// Characters of the prompt echoed back in generated text.
const PROMPT_ECHO_CHARS: usize = 50;

/// Inclusive bounds of the simulated processing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    /// No delay at all.
    pub const NONE: Self = Self {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    #[must_use]
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms.max(min_ms)),
        }
    }

    fn sample(self, rng: &mut impl Rng) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::from_millis(500, 2000)
    }
}

pub struct MockLlm {
    settings: Arc<GatewaySettings>,
    delay: DelayRange,
}

impl MockLlm {
    #[must_use]
    pub fn new(settings: Arc<GatewaySettings>, delay: DelayRange) -> Self {
        Self { settings, delay }
    }

    fn model_id(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.settings.mock_model_id().to_string())
    }

    /// Sample the delay and a canned sentence together so the thread-local
    /// RNG is never held across an await point.
    fn draw(&self) -> (Duration, &'static str) {
        let mut rng = rand::thread_rng();
        let delay = self.delay.sample(&mut rng);
        let text = FINANCIAL_RESPONSES
            .choose(&mut rng)
            .copied()
            .unwrap_or(FINANCIAL_RESPONSES[0]);
        (delay, text)
    }
}

/// Pick a templated reply for greetings and thanks.
fn contextual_reply(last_user_message: &str) -> Option<&'static str> {
    let lowered = last_user_message.to_lowercase();
    if lowered.contains("hello") {
        Some(GREETING_REPLY)
    } else if ["thanks", "thank you"].iter().any(|w| lowered.contains(w)) {
        Some(THANKS_REPLY)
    } else {
        None
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate_text(&self, request: GenerationRequest) -> GatewayResult<GenerationResult> {
        let (delay, canned) = self.draw();
        tokio::time::sleep(delay).await;

        let echo: String = request.prompt.chars().take(PROMPT_ECHO_CHARS).collect();
        let text = format!("{canned}\n\n[Processing prompt: '{echo}...']");

        let input_tokens = word_count(&request.prompt);
        let output_tokens = word_count(&text);
        debug!(delay_ms = delay.as_millis() as u64, input_tokens, "Mock generation");

        Ok(GenerationResult {
            text,
            model_id: self.model_id(request.model_id),
            usage: Usage::completion(input_tokens, output_tokens),
        })
    }

    async fn chat(&self, request: ConversationRequest) -> GatewayResult<ConversationResult> {
        let (delay, canned) = self.draw();
        tokio::time::sleep(delay).await;

        let text = request
            .last_user_message()
            .and_then(|m| contextual_reply(&m.content))
            .unwrap_or(canned);

        let input_tokens: u64 = request.messages.iter().map(|m| word_count(&m.content)).sum();
        let output_tokens = word_count(text);
        let turns = request.messages.len() as u64;
        debug!(delay_ms = delay.as_millis() as u64, turns, "Mock chat");

        Ok(ConversationResult {
            message: ChatMessage::assistant(text),
            model_id: self.model_id(request.model_id),
            usage: Usage::conversation(input_tokens, output_tokens, turns),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::ModelDefaults;
    use crate::domain::{GatewayMode, Role};

    fn mock() -> MockLlm {
        let settings = Arc::new(GatewaySettings::new(
            GatewayMode::Mock,
            ModelDefaults {
                model_id: "live-model".into(),
                max_tokens: 4096,
                temperature: 0.7,
            },
            "dummy-claude-3-haiku",
        ));
        MockLlm::new(settings, DelayRange::NONE)
    }

    #[tokio::test]
    async fn generate_usage_counts_whitespace_tokens() {
        let request = GenerationRequest::new("How is the NASDAQ market today?");
        let result = mock().generate_text(request).await.unwrap();

        assert_eq!(result.usage.input_tokens, 6);
        assert_eq!(result.usage.output_tokens, word_count(&result.text));
        assert_eq!(
            result.usage.total_tokens,
            Some(result.usage.input_tokens + result.usage.output_tokens)
        );
    }

    #[tokio::test]
    async fn generate_echoes_truncated_prompt() {
        let prompt = "x".repeat(80);
        let result = mock().generate_text(GenerationRequest::new(prompt)).await.unwrap();
        let expected = format!("[Processing prompt: '{}...']", "x".repeat(50));
        assert!(result.text.ends_with(&expected));
        assert!(FINANCIAL_RESPONSES.iter().any(|r| result.text.starts_with(r)));
    }

    #[tokio::test]
    async fn generate_truncates_on_char_boundaries() {
        let prompt = "é".repeat(60);
        let result = mock().generate_text(GenerationRequest::new(prompt)).await.unwrap();
        assert!(result.text.contains(&"é".repeat(50)));
        assert!(!result.text.contains(&"é".repeat(51)));
    }

    #[tokio::test]
    async fn model_id_defaults_to_configured_mock_model() {
        let result = mock().generate_text(GenerationRequest::new("hi")).await.unwrap();
        assert_eq!(result.model_id, "dummy-claude-3-haiku");

        let request = GenerationRequest::new("hi").with_model_id("custom-model");
        let result = mock().generate_text(request).await.unwrap();
        assert_eq!(result.model_id, "custom-model");
    }

    #[tokio::test]
    async fn chat_greets_on_hello() {
        let request = ConversationRequest::new(vec![ChatMessage::user("HeLLo there")]);
        let result = mock().chat(request).await.unwrap();
        assert_eq!(result.message.role, Role::Assistant);
        assert_eq!(result.message.content, GREETING_REPLY);
    }

    #[tokio::test]
    async fn chat_acknowledges_thanks() {
        let request = ConversationRequest::new(vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
            ChatMessage::user("Thank you so much"),
        ]);
        let result = mock().chat(request).await.unwrap();
        assert_eq!(result.message.content, THANKS_REPLY);
    }

    #[tokio::test]
    async fn chat_uses_most_recent_user_message_only() {
        let request = ConversationRequest::new(vec![
            ChatMessage::user("hello"),
            ChatMessage::user("what about bonds?"),
            ChatMessage::assistant("hello again"),
        ]);
        let result = mock().chat(request).await.unwrap();
        assert!(FINANCIAL_RESPONSES.contains(&result.message.content.as_str()));
    }

    #[tokio::test]
    async fn chat_falls_back_to_canned_set_without_user_messages() {
        let request = ConversationRequest::new(vec![ChatMessage::system("hello")]);
        let result = mock().chat(request).await.unwrap();
        assert!(FINANCIAL_RESPONSES.contains(&result.message.content.as_str()));
    }

    #[tokio::test]
    async fn chat_usage_counts_all_messages_and_turns() {
        let request = ConversationRequest::new(vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("hello there friend"),
        ]);
        let result = mock().chat(request).await.unwrap();
        assert_eq!(result.usage.input_tokens, 5);
        assert_eq!(result.usage.output_tokens, word_count(GREETING_REPLY));
        assert_eq!(result.usage.conversation_turns, Some(2));
    }

    #[tokio::test]
    async fn chat_with_empty_history_succeeds() {
        let result = mock().chat(ConversationRequest::new(vec![])).await.unwrap();
        assert_eq!(result.usage.conversation_turns, Some(0));
        assert!(!result.message.content.is_empty());
    }

    #[test]
    fn delay_sample_stays_in_range() {
        let range = DelayRange::from_millis(500, 2000);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let d = range.sample(&mut rng);
            assert!(d >= range.min && d <= range.max);
        }
    }

    #[test]
    fn delay_range_clamps_inverted_bounds() {
        let range = DelayRange::from_millis(300, 100);
        assert_eq!(range.min, range.max);
    }
}
