//! `projects api-keys` commands.
//!
//! The project is resolved before any request is made: `--project-id`,
//! then `OPENAI_PROJECT_ID`, otherwise the command fails.

use anyhow::Result;
use clap::{Args, Subcommand};

use orgadmin_core::config::resolve_project_id_from_env;
use orgadmin_core::resources::ProjectApiKeys;

use super::{CreateKeyArgs, DeleteKeyArgs, ListArgs, connect, create_key, delete_key, list_table};
use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct ApiKeysCommand {
    /// Project ID (or set OPENAI_PROJECT_ID)
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    #[command(subcommand)]
    pub command: ApiKeysSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ApiKeysSubcommand {
    /// List project API keys
    List(ListArgs),

    /// Create a project API key
    Create(CreateKeyArgs),

    /// Delete a project API key
    Delete(DeleteKeyArgs),
}

pub async fn handle(cmd: ApiKeysCommand, connection: &ConnectionArgs) -> Result<()> {
    let project_id = resolve_project_id_from_env(cmd.project_id.as_deref())?;
    let keys = ProjectApiKeys::new(project_id);
    let client = connect(connection)?;

    match cmd.command {
        ApiKeysSubcommand::List(args) => list_table(&client, &keys, args.limit).await,
        ApiKeysSubcommand::Create(args) => create_key(&client, &keys, &args).await,
        ApiKeysSubcommand::Delete(args) => delete_key(&client, &keys, &args).await,
    }
}
