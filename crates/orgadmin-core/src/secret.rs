//! Create-response normalization.
//!
//! Key-creating endpoints return the freshly issued secret under one of
//! several field names depending on the resource family and API revision.
//! [`CreatedSecret`] captures all of them and [`CreatedSecret::secret_value`]
//! resolves them in a fixed precedence order.

use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::Result;

/// Prefix carried by organization admin keys.
pub const ADMIN_KEY_PREFIX: &str = "sk-admin";

/// The alternative secret fields a create response may carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretFields {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

type Accessor = fn(&SecretFields) -> Option<&str>;

fn value(fields: &SecretFields) -> Option<&str> {
    fields.value.as_deref()
}

fn token(fields: &SecretFields) -> Option<&str> {
    fields.token.as_deref()
}

fn key(fields: &SecretFields) -> Option<&str> {
    fields.key.as_deref()
}

fn api_key(fields: &SecretFields) -> Option<&str> {
    fields.api_key.as_deref()
}

/// Candidate fields in precedence order: canonical `value` first.
pub const SECRET_CANDIDATES: &[(&str, Accessor)] = &[
    ("value", value),
    ("token", token),
    ("key", key),
    ("api_key", api_key),
];

impl SecretFields {
    /// Return the first non-empty candidate, or [`Error::MissingSecretValue`].
    pub fn resolve(&self) -> Result<&str> {
        SECRET_CANDIDATES
            .iter()
            .find_map(|(_, get)| get(self).filter(|v| !v.is_empty()))
            .ok_or_else(|| Error::MissingSecretValue {
                expected: SECRET_CANDIDATES.iter().map(|(name, _)| *name).collect(),
            })
    }
}

/// A create response: the created record plus its one-time secret.
///
/// The secret is shown once and never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedSecret<R> {
    #[serde(flatten)]
    pub record: R,
    #[serde(flatten)]
    secret: SecretFields,
}

impl<R> CreatedSecret<R> {
    /// Build from parts.
    pub fn new(record: R, secret: SecretFields) -> Self {
        Self { record, secret }
    }

    /// Resolve the issued secret value.
    pub fn secret_value(&self) -> Result<&str> {
        self.secret.resolve()
    }

    /// Resolve the secret, failing with [`Error::MissingSecretValue`] if absent.
    pub fn into_issued(self) -> Result<IssuedKey<R>> {
        let secret = self.secret_value()?.to_string();
        Ok(IssuedKey {
            record: self.record,
            secret,
        })
    }
}

/// A newly created key with its resolved secret.
pub struct IssuedKey<R> {
    pub record: R,
    pub secret: String,
}

impl<R: fmt::Debug> fmt::Debug for IssuedKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedKey")
            .field("record", &self.record)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Returns true if a redacted key string looks like an organization admin key.
///
/// Display only; never used for authorization.
pub fn is_admin_variant(redacted_value: &str) -> bool {
    redacted_value.starts_with(ADMIN_KEY_PREFIX)
}
