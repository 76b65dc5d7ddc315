//! openai-admin - CLI for organization administration.
//!
//! A thin wrapper over `orgadmin-core` and `orgadmin-rest` for listing and
//! managing admin keys, organizations, projects and project API keys.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{admin_keys, organizations, projects};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::AdminKeys(cmd) => admin_keys::handle(cmd, &cli.connection).await,
        Commands::Organizations(cmd) => organizations::handle(cmd, &cli.connection).await,
        Commands::Projects(cmd) => projects::handle(cmd, &cli.connection).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
