//! Product resource.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{to_query, ApiRequest, ClientError, Method, RequestExecutor};

/// Whether a product is visible on sales channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible and purchasable.
    Active,
    /// Hidden from sales channels.
    Archived,
    /// Work in progress, hidden from sales channels.
    Draft,
}

/// A product in the shop's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTML description shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The vendor of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Product categorization, e.g. "Snowboard".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// URL-safe unique name, derived from the title when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Visibility status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// The theme template suffix used to render the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// When the product was published to the online store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The sales-channel scope the product is published to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL GID of the product.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Filter options for listing and counting products.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ProductFilter {
    /// Return only these products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only products with an id greater than this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by exact title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Filter by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Filter by products in this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

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

    /// Restrict the returned fields to this subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Service for the product resource.
#[derive(Debug, Clone)]
pub struct ProductService {
    executor: Arc<RequestExecutor>,
}

impl ProductService {
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    /// Creates a service backed by the given executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Counts products matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a body without a `count` field.
    pub async fn count(&self, filter: Option<&ProductFilter>) -> Result<u64, ClientError> {
        let request = ApiRequest::get(format!("{}/count", Self::PLURAL))
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.count(request).await
    }

    /// Lists products matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a malformed body.
    pub async fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, ClientError> {
        let request = ApiRequest::get(Self::PLURAL)
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.get_list(request, Self::PLURAL).await
    }

    /// Fetches one product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no product has
    /// this id.
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<Product, ClientError> {
        let mut builder = ApiRequest::get(format!("{}/{id}", Self::PLURAL));
        if let Some(fields) = fields {
            builder = builder.query_param("fields", fields);
        }
        self.executor.get_one(builder.build(), Self::SINGULAR).await
    }

    /// Creates a product, returning it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 422 when required fields
    /// are missing (a product needs at least a title).
    pub async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        self.executor
            .send_entity(Method::Post, Self::PLURAL, Self::SINGULAR, product)
            .await
    }

    /// Updates the product with the given id, returning the updated
    /// product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no product has
    /// this id, or 422 on invalid fields.
    pub async fn update(&self, id: u64, product: &Product) -> Result<Product, ClientError> {
        self.executor
            .send_entity(
                Method::Put,
                format!("{}/{id}", Self::PLURAL),
                Self::SINGULAR,
                product,
            )
            .await
    }

    /// Deletes the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no product has
    /// this id.
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        self.executor
            .delete(format!("{}/{id}", Self::PLURAL))
            .await
    }
}
