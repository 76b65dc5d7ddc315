//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use orgadmin_rest::DEFAULT_BASE_URL;

use crate::commands::admin_keys::AdminKeysCommand;
use crate::commands::organizations::OrganizationsCommand;
use crate::commands::projects::ProjectsCommand;

/// OpenAI organization administration CLI.
#[derive(Parser, Debug)]
#[command(name = "openai-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to reach and authenticate against the API.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Admin API key (or set OPENAI_ADMIN_KEY / OPENAI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Organization ID sent with every request
    #[arg(long, global = true, env = "OPENAI_ORG_ID")]
    pub organization: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "OPENAI_ADMIN_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage admin API keys
    AdminKeys(AdminKeysCommand),

    /// Manage organizations
    Organizations(OrganizationsCommand),

    /// Manage projects
    Projects(ProjectsCommand),
}
