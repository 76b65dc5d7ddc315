//! Transport trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// An authenticated REST transport for the administration API.
///
/// Implementations own authentication, wire (de)serialization and any
/// transport-level retry policy. Paths are relative to the API base URL and
/// already percent-escaped.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET path?query`, returning the decoded JSON body.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value>;

    /// `POST path` with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// `DELETE path`.
    async fn delete(&self, path: &str) -> Result<Value>;
}

