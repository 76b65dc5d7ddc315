//! Error types for orgadmin operations.
//!
//! Every failure path surfaces as one of three distinguishable kinds:
//! transport failures reported by the REST collaborator, configuration
//! problems detected before any request is made, and create responses that
//! carried no recognizable secret.

use std::fmt;
use thiserror::Error;

/// The unified error type for orgadmin operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network, HTTP or decode failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Missing or invalid configuration (flags, environment).
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A create response did not include the issued secret.
    #[error(
        "create response did not include a key value (expected one of: {})",
        .expected.join(", ")
    )]
    MissingSecretValue {
        /// Field names that were checked, in precedence order.
        expected: Vec<&'static str>,
    },
}

impl Error {
    /// Returns true if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if this error is a configuration problem.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The server answered with a non-success status.
    #[error("{0}")]
    Api(ApiError),

    /// The response body could not be decoded.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Transport(TransportError::Api(err))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// An error response from the administration API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error type reported by the server (if present).
    pub kind: Option<String>,
    /// Error code reported by the server (if present).
    pub code: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref kind) = self.kind {
            write!(f, " [{}]", kind)?;
        }
        if let Some(ref code) = self.code {
            write!(f, " ({})", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(
        status: u16,
        kind: Option<String>,
        code: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            status,
            kind,
            code,
            message,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Configuration errors, raised before any network call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No project ID from flag or environment.
    #[error("--project-id is required (or set {env})")]
    MissingProjectId { env: &'static str },

    /// No API key from flag or environment.
    #[error("an API key is required (pass --api-key or set {env})")]
    MissingApiKey { env: &'static str },

    /// A required flag was empty.
    #[error("--{flag} is required")]
    MissingFlag { flag: &'static str },

    /// The API base URL is unusable.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}
