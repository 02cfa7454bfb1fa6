//! Shared request executor.
//!
//! Every service method funnels through [`RequestExecutor`]: it owns the
//! `reqwest` client, builds the full URL from the credentials, attaches the
//! authentication headers, sends exactly one request, and decodes the JSON
//! response. There is no retry logic; a failed call surfaces immediately as
//! a [`ClientError`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::errors::{ClientError, InvalidRequestError};
use crate::client::request::{ApiRequest, Method};
use crate::client::response::ApiResponse;
use crate::config::Credentials;

/// Library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed base path of the Admin REST API.
const ADMIN_BASE_PATH: &str = "/admin";

/// Executes requests against one shop's Admin REST API.
///
/// # Thread Safety
///
/// `RequestExecutor` is `Send + Sync`; services hold it behind a shared
/// reference and the only state is immutable configuration, so concurrent
/// calls are safe.
#[derive(Debug)]
pub struct RequestExecutor {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI, e.g. `https://my-store.myshopify.com`.
    base_uri: String,
    /// Headers attached to every request.
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestExecutor>();
};

impl RequestExecutor {
    /// Creates an executor for the given credentials.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This only
    /// happens in extremely unusual circumstances (e.g. TLS initialization
    /// failure).
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let base_uri = credentials.base_url().map_or_else(
            || format!("https://{}", credentials.shop().as_ref()),
            |url| url.as_ref().to_string(),
        );

        let user_agent_prefix = credentials
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            credentials.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the parsed response.
    ///
    /// Exactly one round trip: a non-2xx response is returned as
    /// [`ClientError::Remote`] without any retry.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidRequest`] when the request fails verification
    ///   or has an empty path.
    /// - [`ClientError::Transport`] on DNS, connect, TLS, or timeout
    ///   failures.
    /// - [`ClientError::Remote`] on a non-2xx status, carrying the status
    ///   code and the remote error payload.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        request.verify()?;

        let path = normalize_path(request.path())?;
        let url = format!("{}{ADMIN_BASE_PATH}/{path}", self.base_uri);

        tracing::debug!(method = %request.method(), %url, "dispatching request");

        let mut req_builder = self
            .client
            .request(request.method().into(), &url)
            .query(request.query());

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body() {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();
        let parsed_body: Option<Value> = if body_text.is_empty() {
            None
        } else {
            serde_json::from_str(&body_text).ok()
        };

        tracing::debug!(method = %request.method(), path = request.path(), status, "received response");

        let response = ApiResponse::new(
            status,
            headers,
            parsed_body.clone().unwrap_or_else(|| serde_json::json!({})),
        );

        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!(
            method = %request.method(),
            path = request.path(),
            status,
            request_id = response.request_id(),
            "remote API error"
        );

        Err(ClientError::from_remote(
            status,
            parsed_body,
            response.request_id().map(String::from),
        ))
    }

    /// GETs a count endpoint and returns the `count` field.
    ///
    /// # Errors
    ///
    /// In addition to the [`execute`](Self::execute) errors, returns
    /// [`ClientError::Decode`] when the body carries no integral `count`.
    pub async fn count(&self, request: ApiRequest) -> Result<u64, ClientError> {
        let response = self.execute(request).await?;
        let request_id = response.request_id().map(String::from);
        response
            .body()
            .get("count")
            .and_then(Value::as_u64)
            .ok_or(ClientError::Decode {
                reason: "Response body is missing the 'count' field".to_string(),
                request_id,
            })
    }

    /// GETs a single entity wrapped under `key`.
    ///
    /// # Errors
    ///
    /// In addition to the [`execute`](Self::execute) errors, returns
    /// [`ClientError::Decode`] when `key` is missing or the value does not
    /// deserialize into `T`.
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
    ) -> Result<T, ClientError> {
        let response = self.execute(request).await?;
        decode_under_key(&response, key)
    }

    /// GETs a list of entities wrapped under `key`.
    ///
    /// # Errors
    ///
    /// Same as [`get_one`](Self::get_one).
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
    ) -> Result<Vec<T>, ClientError> {
        let response = self.execute(request).await?;
        decode_under_key(&response, key)
    }

    /// POSTs or PUTs `entity` wrapped under the singular `key` and decodes
    /// the server's confirmed entity from the same key of the response.
    ///
    /// # Errors
    ///
    /// Same as [`get_one`](Self::get_one), plus [`ClientError::Decode`]
    /// when the entity cannot be serialized.
    pub async fn send_entity<T: Serialize + DeserializeOwned>(
        &self,
        method: Method,
        path: impl Into<String>,
        key: &str,
        entity: &T,
    ) -> Result<T, ClientError> {
        let request = ApiRequest::builder(method, path)
            .body(wrap_under_key(key, entity)?)
            .build();
        let response = self.execute(request).await?;
        decode_under_key(&response, key)
    }

    /// DELETEs the given path, discarding the response body.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn delete(&self, path: impl Into<String>) -> Result<(), ClientError> {
        let request = ApiRequest::builder(Method::Delete, path).build();
        self.execute(request).await?;
        Ok(())
    }
}

/// Normalizes a request path: strips leading slashes, ensures exactly one
/// trailing `.json`.
///
/// # Errors
///
/// Returns [`InvalidRequestError::EmptyPath`] when nothing remains after
/// stripping.
pub fn normalize_path(path: &str) -> Result<String, InvalidRequestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(InvalidRequestError::EmptyPath);
    }

    Ok(format!("{path}.json"))
}

/// Serializes a filter struct into pass-through query parameters.
///
/// `None` fields are skipped, scalars are stringified, and arrays are
/// joined with commas. Nested objects are rejected; filters are flat.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when the value cannot be serialized.
pub fn to_query<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, ClientError> {
    let value = serde_json::to_value(params).map_err(|e| ClientError::Decode {
        reason: format!("Failed to serialize query parameters: {e}"),
        request_id: None,
    })?;

    let mut query = Vec::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null | Value::Object(_) => {}
                Value::String(s) => query.push((key, s)),
                Value::Number(n) => query.push((key, n.to_string())),
                Value::Bool(b) => query.push((key, b.to_string())),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.push((key, values.join(",")));
                    }
                }
            }
        }
    }

    Ok(query)
}

/// Wraps an entity under its singular resource key for a request body.
fn wrap_under_key<T: Serialize>(key: &str, entity: &T) -> Result<Value, ClientError> {
    let value = serde_json::to_value(entity).map_err(|e| ClientError::Decode {
        reason: format!("Failed to serialize request body: {e}"),
        request_id: None,
    })?;
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), value);
    Ok(Value::Object(body))
}

fn decode_under_key<T: DeserializeOwned>(
    response: &ApiResponse,
    key: &str,
) -> Result<T, ClientError> {
    let request_id = response.request_id().map(String::from);
    let value = response
        .body()
        .get(key)
        .ok_or_else(|| ClientError::Decode {
            reason: format!("Response body is missing the '{key}' field"),
            request_id: request_id.clone(),
        })?;
    serde_json::from_value(value.clone()).map_err(|e| ClientError::Decode {
        reason: format!("Failed to deserialize '{key}': {e}"),
        request_id,
    })
}

fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    fn test_credentials() -> Credentials {
        Credentials::builder()
            .shop("test-shop")
            .access_token("test-access-token")
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_uri_from_shop_domain() {
        let executor = RequestExecutor::new(&test_credentials());
        assert_eq!(executor.base_uri(), "https://test-shop.myshopify.com");
    }

    #[test]
    fn test_base_uri_override() {
        let credentials = Credentials::builder()
            .shop("test-shop")
            .access_token("test-access-token")
            .base_url("http://127.0.0.1:4444")
            .build()
            .unwrap();
        let executor = RequestExecutor::new(&credentials);
        assert_eq!(executor.base_uri(), "http://127.0.0.1:4444");
    }

    #[test]
    fn test_access_token_header_injection() {
        let executor = RequestExecutor::new(&test_credentials());
        assert_eq!(
            executor.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let executor = RequestExecutor::new(&test_credentials());
        assert_eq!(
            executor.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let executor = RequestExecutor::new(&test_credentials());
        let user_agent = executor.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Shopify REST Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let credentials = Credentials::builder()
            .shop("test-shop")
            .access_token("test-access-token")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let executor = RequestExecutor::new(&credentials);
        let user_agent = executor.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_executor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestExecutor>();
    }

    #[test]
    fn test_normalize_path_variants() {
        assert_eq!(normalize_path("collects").unwrap(), "collects.json");
        assert_eq!(normalize_path("/collects").unwrap(), "collects.json");
        assert_eq!(normalize_path("collects.json").unwrap(), "collects.json");
        assert_eq!(
            normalize_path("price_rules/42.json").unwrap(),
            "price_rules/42.json"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        assert!(matches!(
            normalize_path(""),
            Err(InvalidRequestError::EmptyPath)
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(InvalidRequestError::EmptyPath)
        ));
        assert!(matches!(
            normalize_path(".json"),
            Err(InvalidRequestError::EmptyPath)
        ));
    }

    #[derive(Serialize)]
    struct SampleFilter {
        #[serde(skip_serializing_if = "Option::is_none")]
        since_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        published: Option<bool>,
    }

    #[test]
    fn test_to_query_skips_none_fields() {
        let filter = SampleFilter {
            since_id: Some(100),
            limit: None,
            fields: None,
            published: None,
        };
        let query = to_query(&filter).unwrap();
        assert_eq!(query, vec![("since_id".to_string(), "100".to_string())]);
    }

    #[test]
    fn test_to_query_joins_arrays_with_commas() {
        let filter = SampleFilter {
            since_id: None,
            limit: None,
            fields: Some(vec!["id".to_string(), "product_id".to_string()]),
            published: None,
        };
        let query = to_query(&filter).unwrap();
        assert_eq!(
            query,
            vec![("fields".to_string(), "id,product_id".to_string())]
        );
    }

    #[test]
    fn test_to_query_stringifies_scalars() {
        let filter = SampleFilter {
            since_id: Some(5),
            limit: Some(250),
            fields: None,
            published: Some(true),
        };
        let mut query = to_query(&filter).unwrap();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "250".to_string()),
                ("published".to_string(), "true".to_string()),
                ("since_id".to_string(), "5".to_string()),
            ]
        );
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct SampleEntity {
        name: String,
    }

    #[test]
    fn test_wrap_under_key_uses_singular_key() {
        let entity = SampleEntity {
            name: "widget".to_string(),
        };
        let body = wrap_under_key("collect", &entity).unwrap();
        assert_eq!(body, json!({"collect": {"name": "widget"}}));
    }

    #[test]
    fn test_decode_under_key_missing_key() {
        let response = ApiResponse::new(200, HashMap::new(), json!({"other": {}}));
        let result: Result<SampleEntity, _> = decode_under_key(&response, "collect");
        match result {
            Err(ClientError::Decode { reason, .. }) => assert!(reason.contains("'collect'")),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_under_key_success() {
        let response = ApiResponse::new(
            200,
            HashMap::new(),
            json!({"collect": {"name": "widget"}}),
        );
        let entity: SampleEntity = decode_under_key(&response, "collect").unwrap();
        assert_eq!(
            entity,
            SampleEntity {
                name: "widget".to_string()
            }
        );
    }
}
