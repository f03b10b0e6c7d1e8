//! LLM adapter modules.
//!
//! Implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait: the
//! live Amazon Bedrock backend and the canned mock backend.

pub mod bedrock;
pub mod mock;
