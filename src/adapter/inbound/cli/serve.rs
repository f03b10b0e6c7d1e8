use tracing::info;

use super::command::ServeArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;
use crate::infrastructure::server;

/// Run the HTTP service until Ctrl-C.
pub async fn execute(mut config: Config, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(mode) = args.mode {
        config.gateway.mode = mode;
    }
    config.validate()?;

    info!(
        service = %config.server.service_name,
        version = env!("CARGO_PKG_VERSION"),
        mode = %config.gateway.mode,
        "chat-api starting"
    );

    let gateway = bootstrap::build_gateway(&config).await;
    server::serve(&config.server, gateway).await
}
