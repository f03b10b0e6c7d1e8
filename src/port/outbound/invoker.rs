//! Blocking model invocation port.
//!
//! The provider call is synchronous. Callers on the async runtime must run
//! it on a blocking worker thread, never directly on a runtime thread. The
//! SDK-backed implementation blocks that worker on the runtime handle.

use crate::error::GatewayResult;

/// Sends an already-serialized request body to a hosted model.
pub trait ModelInvoker: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Invoke `model_id` with `body` and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Provider`](crate::error::GatewayError::Provider)
    /// when the provider rejects the call and
    /// [`GatewayError::Transport`](crate::error::GatewayError::Transport) for
    /// every other failure. The body is not inspected here.
    fn invoke_model(&self, model_id: &str, body: &[u8]) -> GatewayResult<Vec<u8>>;
}
