//! Error taxonomy for API calls.
//!
//! Every service method returns `Result<T, ClientError>`. The variants keep
//! the three failure classes distinct: the remote API said no
//! ([`ClientError::Remote`]), the bytes never made it there or back
//! ([`ClientError::Transport`]), or the response did not have the shape the
//! client expected ([`ClientError::Decode`]).

use crate::client::request::Method;
use serde_json::Value;
use thiserror::Error;

/// An error returned by a service method.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote API answered with a non-2xx status.
    #[error("Remote API error (status {status}): {message}")]
    Remote {
        /// The HTTP status code.
        status: u16,
        /// Human-readable message extracted from the error payload.
        message: String,
        /// The raw error payload, when the body was parseable JSON.
        payload: Option<Value>,
        /// The `X-Request-Id` of the failed request, when present.
        request_id: Option<String>,
    },

    /// The request never completed: DNS, connect, TLS, or timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// What was missing or malformed.
        reason: String,
        /// The `X-Request-Id` of the response, when present.
        request_id: Option<String>,
    },

    /// The request failed pre-send verification.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

impl ClientError {
    /// Builds a [`ClientError::Remote`] from a failed response, extracting
    /// a message from Shopify's error payload conventions.
    ///
    /// Shopify reports errors under `errors` (string, array, or object),
    /// `error`, or `error_description`. Whichever is present is flattened
    /// into a readable message; an unrecognized body falls back to the
    /// status code alone.
    #[must_use]
    pub fn from_remote(status: u16, body: Option<Value>, request_id: Option<String>) -> Self {
        let message = body
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Remote {
            status,
            message,
            payload: body,
            request_id,
        }
    }

    /// The remote status code, when this error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn extract_error_message(body: &Value) -> Option<String> {
    for key in ["errors", "error", "error_description"] {
        if let Some(value) = body.get(key) {
            return Some(flatten_error_value(value));
        }
    }
    None
}

// "errors" can be a bare string, an array of strings, or a map of field
// name to array of messages.
fn flatten_error_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_error_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(field, messages)| format!("{field}: {}", flatten_error_value(messages)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

/// A request that failed verification before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path was empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A body-carrying method was built without a body.
    #[error("{method} requests require a body.")]
    MissingBody {
        /// The offending method.
        method: Method,
    },

    /// A body was attached to a method that does not take one.
    #[error("{method} requests cannot carry a body.")]
    BodyNotAllowed {
        /// The offending method.
        method: Method,
    },
}
