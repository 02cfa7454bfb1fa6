//! Parsed HTTP response carrying status, headers, and a JSON body.

use serde_json::Value;
use std::collections::HashMap;

/// A response from the Admin REST API, already parsed into JSON.
///
/// Produced by the [`RequestExecutor`](crate::client::RequestExecutor) for
/// successful round trips; typed decoding happens on top of this.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: u16,
    headers: HashMap<String, Vec<String>>,
    body: Value,
}

impl ApiResponse {
    /// Assembles a response from its parts.
    ///
    /// Header names are lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of the named header, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// The `X-Request-Id` assigned by Shopify, useful in support tickets.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// The parsed JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response, returning the JSON body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }
}
