//! Generation results and usage accounting.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Token usage attached to a result.
///
/// Completions report `total_tokens`; conversations report
/// `conversation_turns`. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_turns: Option<u64>,
}

impl Usage {
    /// Single-shot usage. The total saturates at `u64::MAX`.
    #[must_use]
    pub const fn completion(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: Some(input_tokens.saturating_add(output_tokens)),
            conversation_turns: None,
        }
    }

    #[must_use]
    pub const fn conversation(input_tokens: u64, output_tokens: u64, turns: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: None,
            conversation_turns: Some(turns),
        }
    }
}

/// Approximate token count: whitespace-separated segments.
#[must_use]
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Text produced for a single prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated text, possibly empty.
    pub text: String,
    /// Model that served the request.
    pub model_id: String,
    pub usage: Usage,
}

/// Assistant reply to a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationResult {
    /// Always has the `assistant` role.
    pub message: ChatMessage,
    /// Model that served the request.
    pub model_id: String,
    pub usage: Usage,
}
