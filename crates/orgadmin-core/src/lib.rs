//! orgadmin-core - Resource model, pagination and operations for the
//! organization administration API.
//!
//! All network access goes through the [`Transport`] trait; this crate
//! contains no HTTP code. Operations for every resource family flow through
//! [`AdminClient`].
//!
//! # Example
//!
//! ```no_run
//! use futures_util::TryStreamExt;
//! use orgadmin_core::resources::{Projects, Resource};
//! use orgadmin_core::{AdminClient, PageSize, Transport};
//!
//! # async fn example(transport: impl Transport) -> orgadmin_core::Result<()> {
//! let client = AdminClient::new(transport);
//! let projects = Projects { include_archived: false };
//!
//! let all = client.list(&projects, PageSize::default()).try_collect::<Vec<_>>().await?;
//! for project in &all {
//!     println!("{:?}", Projects::row(project));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod secret;
pub mod time;
pub mod transport;

pub use client::AdminClient;
pub use error::{ApiError, ConfigurationError, Error, TransportError};
pub use pagination::{Identified, Page, PageRequest, PageSize};
pub use secret::{CreatedSecret, IssuedKey};
pub use transport::Transport;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
