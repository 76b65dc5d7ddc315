//! `admin-keys` commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use orgadmin_core::resources::AdminKeys;

use super::{CreateKeyArgs, DeleteKeyArgs, ListArgs, connect, create_key, delete_key, list_table};
use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct AdminKeysCommand {
    #[command(subcommand)]
    pub command: AdminKeysSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminKeysSubcommand {
    /// List admin API keys
    List(ListArgs),

    /// Create an admin API key
    Create(CreateKeyArgs),

    /// Delete an admin API key
    Delete(DeleteKeyArgs),
}

pub async fn handle(cmd: AdminKeysCommand, connection: &ConnectionArgs) -> Result<()> {
    let client = connect(connection)?;

    match cmd.command {
        AdminKeysSubcommand::List(args) => list_table(&client, &AdminKeys, args.limit).await,
        AdminKeysSubcommand::Create(args) => create_key(&client, &AdminKeys, &args).await,
        AdminKeysSubcommand::Delete(args) => delete_key(&client, &AdminKeys, &args).await,
    }
}
