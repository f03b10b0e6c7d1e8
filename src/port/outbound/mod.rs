//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod invoker;
pub mod llm;
