//! CLI module graph and dispatch.

pub mod command;
pub mod output;
pub mod probe;
pub mod serve;
pub mod verify;

use command::{Cli, Commands, ServeArgs};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Configure output and logging, load configuration and run the command.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json));

    let config = Config::resolve(cli.config.as_deref())?;
    config.logging.init(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => serve::execute(config, args).await,
        Commands::Verify => verify::execute(&config).await,
        Commands::Probe(args) => probe::execute(config, args).await,
    }
}
