//! Outbound adapters (driven side).

pub mod bedrock;
pub mod llm;
