//! Command implementations.

pub mod admin_keys;
pub mod organizations;
pub mod project_api_keys;
pub mod projects;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use futures_util::StreamExt;
use tracing::debug;

use orgadmin_core::resources::{Deleted, KeyResource, Resource};
use orgadmin_core::{AdminClient, PageSize};
use orgadmin_rest::{ApiUrl, RestConfig, RestTransport, resolve_api_key};

use crate::cli::ConnectionArgs;
use crate::output::{self, Table};

pub type Client = AdminClient<RestTransport>;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Max records per page (1-100)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub limit: i64,
}

#[derive(Args, Debug)]
pub struct CreateKeyArgs {
    /// Name for the new key
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteKeyArgs {
    /// ID of the key to delete
    pub key_id: String,
}

/// Build an API client from connection settings.
pub fn connect(args: &ConnectionArgs) -> Result<Client> {
    let api_key = resolve_api_key(args.api_key.as_deref(), |name| std::env::var(name).ok())?;
    let base_url = ApiUrl::new(&args.base_url)?;

    let config = RestConfig::new(api_key)?
        .with_base_url(base_url)
        .with_organization(args.organization.clone())
        .with_timeout(Duration::from_secs(args.timeout));
    debug!(?config, "connecting");

    let transport = RestTransport::new(config).context("Failed to build HTTP client")?;
    Ok(AdminClient::new(transport))
}

/// Stream every record of `resource` into a table on stdout.
///
/// Rows fetched before a failing page are still printed.
pub async fn list_table<R: Resource>(client: &Client, resource: &R, limit: i64) -> Result<()> {
    let mut table = Table::new(R::COLUMNS);
    let mut records = std::pin::pin!(client.list(resource, PageSize::new(limit)));

    let mut failure = None;
    while let Some(record) = records.next().await {
        match record {
            Ok(record) => table.push(R::row(&record)),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    debug!(rows = table.len(), "listed {}", R::NAME);
    table.print()?;

    match failure {
        Some(e) => Err(e).with_context(|| format!("Failed to list {}", R::NAME)),
        None => Ok(()),
    }
}

/// Create a key and print its secret, the only time it is shown.
pub async fn create_key<R: KeyResource>(
    client: &Client,
    resource: &R,
    args: &CreateKeyArgs,
) -> Result<()> {
    let name = args.name.as_deref().unwrap_or_default();
    let issued = client
        .create_key(resource, name)
        .await
        .with_context(|| format!("Failed to create {} key", R::NAME))?;

    println!("{}", issued.secret);
    output::success("Key created; store the value above, it will not be shown again");

    Ok(())
}

/// Delete a key and print the acknowledgment.
pub async fn delete_key<R: KeyResource>(
    client: &Client,
    resource: &R,
    args: &DeleteKeyArgs,
) -> Result<()> {
    let deleted = client
        .delete_key(resource, &args.key_id)
        .await
        .with_context(|| format!("Failed to delete {} key", R::NAME))?;

    println!("{}", deleted_line(&deleted));
    Ok(())
}

fn deleted_line(deleted: &Deleted) -> String {
    format!("DELETED\t{}\t{}", deleted.deleted, deleted.id)
}
