//! Custom collection resource.
//!
//! Custom collections hold a manually curated set of products; membership
//! is managed through the [collect](crate::resources::collect) resource.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{to_query, ApiRequest, ClientError, Method, RequestExecutor};

/// How products in a collection are ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionSortOrder {
    /// Alphabetically, A to Z.
    AlphaAsc,
    /// Alphabetically, Z to A.
    AlphaDesc,
    /// By best-selling products.
    BestSelling,
    /// By date created, oldest first.
    Created,
    /// By date created, newest first.
    CreatedDesc,
    /// Manually, using the collect `position`.
    Manual,
    /// By price, highest first.
    PriceDesc,
    /// By price, lowest first.
    PriceAsc,
}

/// A manually curated collection of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomCollection {
    /// The unique identifier of the collection.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL-safe unique name, derived from the title when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// HTML description shown on the collection page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// How products in the collection are ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<CollectionSortOrder>,

    /// The theme template suffix used to render the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Whether the collection is visible on the online store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// When the collection was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The sales-channel scope the collection is published to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// When the collection was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL GID of the collection.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Filter options for listing and counting custom collections.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CustomCollectionFilter {
    /// Return only these collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only collections with an id greater than this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by exact title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Published at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Published at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by published status: `published`, `unpublished`, or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Restrict the returned fields to this subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Service for the custom collection resource.
#[derive(Debug, Clone)]
pub struct CustomCollectionService {
    executor: Arc<RequestExecutor>,
}

impl CustomCollectionService {
    const SINGULAR: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    /// Creates a service backed by the given executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Counts custom collections matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a body without a `count` field.
    pub async fn count(
        &self,
        filter: Option<&CustomCollectionFilter>,
    ) -> Result<u64, ClientError> {
        let request = ApiRequest::get(format!("{}/count", Self::PLURAL))
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.count(request).await
    }

    /// Lists custom collections matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a malformed body.
    pub async fn list(
        &self,
        filter: Option<&CustomCollectionFilter>,
    ) -> Result<Vec<CustomCollection>, ClientError> {
        let request = ApiRequest::get(Self::PLURAL)
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.get_list(request, Self::PLURAL).await
    }

    /// Fetches one custom collection by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no collection
    /// has this id.
    pub async fn get(
        &self,
        id: u64,
        fields: Option<&str>,
    ) -> Result<CustomCollection, ClientError> {
        let mut builder = ApiRequest::get(format!("{}/{id}", Self::PLURAL));
        if let Some(fields) = fields {
            builder = builder.query_param("fields", fields);
        }
        self.executor.get_one(builder.build(), Self::SINGULAR).await
    }

    /// Creates a custom collection, returning it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 422 when required fields
    /// are missing (a collection needs at least a title).
    pub async fn create(
        &self,
        collection: &CustomCollection,
    ) -> Result<CustomCollection, ClientError> {
        self.executor
            .send_entity(Method::Post, Self::PLURAL, Self::SINGULAR, collection)
            .await
    }

    /// Updates the custom collection with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no collection
    /// has this id, or 422 on invalid fields.
    pub async fn update(
        &self,
        id: u64,
        collection: &CustomCollection,
    ) -> Result<CustomCollection, ClientError> {
        self.executor
            .send_entity(
                Method::Put,
                format!("{}/{id}", Self::PLURAL),
                Self::SINGULAR,
                collection,
            )
            .await
    }

    /// Deletes the custom collection with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no collection
    /// has this id.
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        self.executor
            .delete(format!("{}/{id}", Self::PLURAL))
            .await
    }
}
