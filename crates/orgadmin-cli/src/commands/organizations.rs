//! `organizations` commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use orgadmin_core::resources::Organizations;

use super::{ListArgs, connect, list_table};
use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct OrganizationsCommand {
    #[command(subcommand)]
    pub command: OrganizationsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrganizationsSubcommand {
    /// List organizations
    List(ListArgs),
}

pub async fn handle(cmd: OrganizationsCommand, connection: &ConnectionArgs) -> Result<()> {
    let client = connect(connection)?;

    match cmd.command {
        OrganizationsSubcommand::List(args) => {
            list_table(&client, &Organizations, args.limit).await
        }
    }
}
