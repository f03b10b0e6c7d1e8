//! HTTP server lifecycle.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::adapter::inbound::http::{router, AppState};
use crate::application::gateway::Gateway;
use crate::error::Result;
use crate::infrastructure::config::server::ServerConfig;

/// Bind the listener and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, gateway: Arc<Gateway>) -> Result<()> {
    let state = Arc::new(AppState::new(gateway, config.service_name.clone()));
    let app = router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
