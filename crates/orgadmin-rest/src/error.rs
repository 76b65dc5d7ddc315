//! Mapping of HTTP failures onto core error kinds.

use serde::Deserialize;
use serde_json::Value;

use orgadmin_core::{ApiError, Error, TransportError};

/// Convert a `reqwest` failure into a transport error.
pub(crate) fn from_reqwest(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let transport = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(transport)
}

/// API error envelope: `{"error": {"message": ..., "type": ..., "code": ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    code: Option<Value>,
}

/// Build an [`ApiError`] from a status and raw response body.
pub(crate) fn api_error(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = envelope.error.code.and_then(|code| match code {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            });
            ApiError::new(status, envelope.error.kind, code, envelope.error.message)
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            ApiError::new(status, None, None, (!text.is_empty()).then_some(text))
        }
    }
}
