//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!      ┌────────────┐        ┌─────────────────────────┐
//!      │ HTTP / CLI │───────▶│   Application (Gateway) │
//!      └────────────┘        └────────────┬────────────┘
//!                                         │ Llm
//!                           ┌─────────────┴─────────────┐
//!                           ▼                           ▼
//!                     ┌───────────┐              ┌─────────────┐
//!                     │  MockLlm  │              │ BedrockLlm  │
//!                     └───────────┘              └──────┬──────┘
//!                                                       │ ModelInvoker
//!                                                       ▼
//!                                                ┌─────────────┐
//!                                                │BedrockClient│
//!                                                └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::llm::Llm`] - generation and chat capability
//! - [`outbound::invoker::ModelInvoker`] - blocking provider call

pub mod outbound;
