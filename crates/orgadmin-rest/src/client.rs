//! HTTP transport implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use orgadmin_core::{Result, Transport, TransportError};

use crate::config::RestConfig;
use crate::error::{api_error, from_reqwest};

/// Header carrying the organization to act on.
const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Authenticated JSON transport over HTTPS.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    config: RestConfig,
}

impl RestTransport {
    /// Build a transport from configuration.
    pub fn new(config: RestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("orgadmin/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .build()
            .map_err(from_reqwest)?;

        Ok(Self { client, config })
    }

    /// Returns the configuration this transport was built with.
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Send a request and decode the JSON body or error envelope.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        trace!(status = %status, "response");

        let body = response.bytes().await.map_err(from_reqwest)?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body).into());
        }

        // Some endpoints answer with an empty body.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }

        serde_json::from_slice(&body).map_err(|e| TransportError::from(e).into())
    }
}

fn default_headers(config: &RestConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(org) = &config.organization {
        let value = HeaderValue::from_str(org).map_err(|e| TransportError::Http {
            message: format!("invalid organization header: {e}"),
        })?;
        headers.insert(ORGANIZATION_HEADER, value);
    }
    Ok(headers)
}

#[async_trait]
impl Transport for RestTransport {
    #[instrument(skip(self), fields(base = %self.config.base_url))]
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.config.base_url.endpoint(path);
        debug!(%url, "GET");
        trace!(?query, "query parameters");

        self.send(self.client.get(&url).query(query)).await
    }

    #[instrument(skip(self, body), fields(base = %self.config.base_url))]
    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.config.base_url.endpoint(path);
        debug!(%url, "POST");

        self.send(self.client.post(&url).json(body)).await
    }

    #[instrument(skip(self), fields(base = %self.config.base_url))]
    async fn delete(&self, path: &str) -> Result<Value> {
        let url = self.config.base_url.endpoint(path);
        debug!(%url, "DELETE");

        self.send(self.client.delete(&url)).await
    }
}
