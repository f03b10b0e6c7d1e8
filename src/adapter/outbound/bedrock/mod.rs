//! Amazon Bedrock access.
//!
//! The runtime `InvokeModel` call and the control plane model listing,
//! both through the AWS SDK.

pub mod client;

pub use client::{BedrockClient, ClientOptions, FoundationModel};
