//! Command-line interface definitions.
//!
//! `serve` runs the HTTP service and is the default when no subcommand is
//! given. `verify` checks Bedrock access and `probe` sends one request of
//! each kind through the gateway.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::GatewayMode;

/// LLM gateway for the financial assistant
#[derive(Parser, Debug)]
#[command(name = "chat-api")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve(ServeArgs),

    /// Check Bedrock credentials and list the available Claude models
    Verify,

    /// Send one generate and one chat request through the gateway
    Probe(ProbeArgs),
}

/// Overrides for `chat-api serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Starting mode [mock, live]
    #[arg(long)]
    pub mode: Option<GatewayMode>,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Mode to probe [mock, live]; defaults to the configured mode
    #[arg(long)]
    pub mode: Option<GatewayMode>,

    /// Prompt for the generate request
    #[arg(long, default_value = "What is a P/E ratio?")]
    pub prompt: String,

    /// User message for the chat request
    #[arg(long, default_value = "Hello")]
    pub message: String,

    /// Upper bound on generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["chat-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from([
            "chat-api", "serve", "--host", "127.0.0.1", "--port", "9000", "--mode", "LIVE",
        ])
        .unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.mode, Some(GatewayMode::Live));
    }

    #[test]
    fn invalid_mode_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["chat-api", "serve", "--mode", "openai"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["chat-api", "verify", "--json", "-vv", "-c", "x.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Verify)));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn probe_defaults() {
        let cli = Cli::try_parse_from(["chat-api", "probe"]).unwrap();
        let Some(Commands::Probe(args)) = cli.command else {
            panic!("expected probe");
        };
        assert!(args.mode.is_none());
        assert_eq!(args.message, "Hello");
        assert!(args.max_tokens.is_none());
    }
}
