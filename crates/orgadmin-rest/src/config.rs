//! Transport configuration.

use std::fmt;
use std::time::Duration;

use orgadmin_core::{ConfigurationError, Result};

use crate::ApiUrl;

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENVS: &[&str] = &["OPENAI_ADMIN_KEY", "OPENAI_API_KEY"];

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for [`RestTransport`](crate::RestTransport).
#[derive(Clone)]
pub struct RestConfig {
    pub base_url: ApiUrl,
    pub api_key: String,
    /// Sent as `OpenAI-Organization` when set.
    pub organization: Option<String>,
    pub timeout: Duration,
}

impl RestConfig {
    /// Configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigurationError::MissingApiKey {
                env: API_KEY_ENVS[0],
            }
            .into());
        }
        Ok(Self {
            base_url: ApiUrl::default(),
            api_key,
            organization: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_base_url(mut self, base_url: ApiUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization.filter(|o| !o.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Pick the API key: explicit value first, then the first non-empty env var.
pub fn resolve_api_key(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    API_KEY_ENVS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|v| !v.is_empty())
        .ok_or_else(|| {
            ConfigurationError::MissingApiKey {
                env: API_KEY_ENVS[0],
            }
            .into()
        })
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("organization", &self.organization)
            .field("timeout", &self.timeout)
            .finish()
    }
}
