//! `projects` commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use orgadmin_core::resources::Projects;

use super::project_api_keys::{self, ApiKeysCommand};
use super::{ListArgs, connect, list_table};
use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsSubcommand {
    /// List projects
    List(ProjectListArgs),

    /// Manage project API keys
    ApiKeys(ApiKeysCommand),
}

#[derive(Args, Debug)]
pub struct ProjectListArgs {
    /// Include archived projects
    #[arg(long)]
    pub include_archived: bool,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn handle(cmd: ProjectsCommand, connection: &ConnectionArgs) -> Result<()> {
    match cmd.command {
        ProjectsSubcommand::List(args) => {
            let client = connect(connection)?;
            let projects = Projects {
                include_archived: args.include_archived,
            };
            list_table(&client, &projects, args.list.limit).await
        }
        ProjectsSubcommand::ApiKeys(cmd) => project_api_keys::handle(cmd, connection).await,
    }
}
