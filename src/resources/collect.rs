//! Collect resource: the link between a product and a custom collection.
//!
//! A collect is a join record connecting one product to one custom
//! collection. The remote API exposes no update operation for collects; to
//! move a product, delete the collect and create a new one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{to_query, ApiRequest, ClientError, Method, RequestExecutor};

/// A product-to-custom-collection link.
///
/// All fields are optional: an absent field means the remote API did not
/// return it (or, on create, that the caller is not setting it), which is
/// distinct from a zero value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Collect {
    /// The unique identifier of the collect.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product being placed in the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The ID of the custom collection containing the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// The position of the product in the collection, ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// Sort key used when the collection is sorted manually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<String>,

    /// When the collect was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the collect was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filter options for listing and counting collects.
///
/// Set fields pass through to the query string unmodified.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CollectFilter {
    /// Restrict results to collects for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Restrict results to collects in this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Return only collects with an id greater than this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Restrict the returned fields to this subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Service for the collect resource.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use shopify_rest::{CollectService, Credentials, RequestExecutor};
///
/// let credentials = Credentials::builder()
///     .shop("my-store")
///     .access_token("shpat_abc123")
///     .build()?;
/// let executor = Arc::new(RequestExecutor::new(&credentials));
/// let collects = CollectService::new(executor);
///
/// let total = collects.count(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CollectService {
    executor: Arc<RequestExecutor>,
}

impl CollectService {
    const SINGULAR: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    /// Creates a service backed by the given executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Counts collects matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a body without a `count` field.
    pub async fn count(&self, filter: Option<&CollectFilter>) -> Result<u64, ClientError> {
        let request = ApiRequest::get(format!("{}/count", Self::PLURAL))
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.count(request).await
    }

    /// Lists collects matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a malformed body.
    pub async fn list(&self, filter: Option<&CollectFilter>) -> Result<Vec<Collect>, ClientError> {
        let request = ApiRequest::get(Self::PLURAL)
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.get_list(request, Self::PLURAL).await
    }

    /// Fetches one collect by id, optionally restricting the returned
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no collect has
    /// this id.
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<Collect, ClientError> {
        let mut builder = ApiRequest::get(format!("{}/{id}", Self::PLURAL));
        if let Some(fields) = fields {
            builder = builder.query_param("fields", fields);
        }
        self.executor.get_one(builder.build(), Self::SINGULAR).await
    }

    /// Creates a collect, placing a product in a custom collection.
    ///
    /// Returns the collect as confirmed by the server, with its assigned
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 422 when the product or
    /// collection id is missing or invalid.
    pub async fn create(&self, collect: &Collect) -> Result<Collect, ClientError> {
        self.executor
            .send_entity(Method::Post, Self::PLURAL, Self::SINGULAR, collect)
            .await
    }

    /// Deletes a collect, removing the product from its collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no collect has
    /// this id.
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        self.executor
            .delete(format!("{}/{id}", Self::PLURAL))
            .await
    }
}
