//! API base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use orgadmin_core::{ConfigurationError, Error};

/// Default base URL of the administration API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// A validated API base URL.
///
/// Must use HTTPS; plain HTTP is accepted only for loopback hosts so tests
/// can point the client at a local mock server.
///
/// # Example
///
/// ```
/// use orgadmin_rest::ApiUrl;
///
/// let api = ApiUrl::new("https://api.openai.com/v1/").unwrap();
/// assert_eq!(
///     api.endpoint("/organization/projects"),
///     "https://api.openai.com/v1/organization/projects"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and validate a base URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| invalid(s, e.to_string()))?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Join an API path (with leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(invalid(original, "must be an absolute URL"));
        }

        if url.host_str().is_none() {
            return Err(invalid(original, "must have a host"));
        }

        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(invalid(
                original,
                "must use HTTPS (HTTP allowed only for localhost)",
            ));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(original, "must not carry a query or fragment"));
        }

        Ok(())
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> Error {
    ConfigurationError::InvalidBaseUrl {
        value: value.to_string(),
        reason: reason.into(),
    }
    .into()
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
