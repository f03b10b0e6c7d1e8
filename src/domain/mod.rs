//! Backend-agnostic request, result, and mode types.
//!
//! Nothing in this module performs I/O. Adapters translate these types to
//! and from provider wire formats.

pub mod message;
pub mod mode;
pub mod request;
pub mod result;

pub use message::{ChatMessage, Role};
pub use mode::{GatewayMode, ParseModeError};
pub use request::{ConversationRequest, GenerationRequest};
pub use result::{word_count, ConversationResult, GenerationResult, Usage};
