//! orgadmin-rest - HTTPS transport for the organization administration API.
//!
//! [`RestTransport`] implements [`orgadmin_core::Transport`] with `reqwest`:
//! bearer authentication, optional organization header, JSON bodies and
//! API error-envelope decoding.

mod api_url;
mod client;
mod config;
mod error;

pub use api_url::{ApiUrl, DEFAULT_BASE_URL};
pub use client::RestTransport;
pub use config::{API_KEY_ENVS, DEFAULT_TIMEOUT, RestConfig, resolve_api_key};
