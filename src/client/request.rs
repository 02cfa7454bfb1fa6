//! HTTP request description and pre-send verification.

use crate::client::errors::InvalidRequestError;
use serde_json::Value;
use std::fmt;

/// The HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl Method {
    /// Whether this method carries a JSON body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A single API request, built by a service method and executed by the
/// shared [`RequestExecutor`](crate::client::RequestExecutor).
///
/// `path` is relative to the Admin API base path and may omit the `.json`
/// suffix; the executor normalizes it before sending.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    /// Starts building a request with the given method and path.
    #[must_use]
    pub fn builder(method: Method, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder {
            request: Self {
                method,
                path: path.into(),
                query: Vec::new(),
                body: None,
            },
        }
    }

    /// Shorthand for a bare GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> ApiRequestBuilder {
        Self::builder(Method::Get, path)
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The request path, as given by the caller.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Checks that the request is internally consistent before sending.
    ///
    /// # Errors
    ///
    /// - [`InvalidRequestError::EmptyPath`] when the path is empty.
    /// - [`InvalidRequestError::MissingBody`] when a POST or PUT carries no
    ///   body.
    /// - [`InvalidRequestError::BodyNotAllowed`] when a GET or DELETE
    ///   carries one.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }
        match (self.method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidRequestError::MissingBody {
                method: self.method,
            }),
            (false, true) => Err(InvalidRequestError::BodyNotAllowed {
                method: self.method,
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`ApiRequest`].
#[derive(Clone, Debug)]
pub struct ApiRequestBuilder {
    request: ApiRequest,
}

impl ApiRequestBuilder {
    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    /// Appends a batch of query parameters.
    #[must_use]
    pub fn query_params(mut self, params: Vec<(String, String)>) -> Self {
        self.request.query.extend(params);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> ApiRequest {
        self.request
    }
}
