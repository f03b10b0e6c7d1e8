//! chat-api - LLM gateway for a financial assistant.
//!
//! Validates text-generation and chat requests over HTTP and serves them from
//! one of two interchangeable backends: Amazon Bedrock (Anthropic Claude) or
//! a canned mock that needs no credentials. The active backend can be
//! switched at runtime.
//!
//! # Architecture
//!
//! Ports and adapters:
//!
//! - [`domain`] - Requests, results, messages and the gateway mode
//! - [`port`] - The `Llm` capability and the blocking `ModelInvoker`
//! - [`application`] - Prompt template, shared settings, model catalog and
//!   the `Gateway` that selects a backend per call
//! - [`adapter`] - HTTP and CLI surfaces, the Bedrock client and both backends
//! - [`infrastructure`] - Configuration, logging, wiring and server lifecycle
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use chat_api::domain::GenerationRequest;
//! use chat_api::infrastructure::bootstrap;
//! use chat_api::infrastructure::config::Config;
//!
//! # async fn run() -> chat_api::error::Result<()> {
//! let config = Config::resolve(None)?;
//! let gateway = bootstrap::build_gateway(&config).await;
//! let result = gateway.generate_text(GenerationRequest::new("What is EBITDA?")).await?;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
