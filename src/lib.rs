//! A Rust client for the Shopify Admin REST API.
//!
//! The crate has two shallow layers:
//!
//! - **Entities**: flat value objects (`Collect`, `PriceRule`, `Product`,
//!   `CustomCollection`) whose fields map one-to-one to the remote JSON.
//!   Every field is optional; an absent field is `None`, never zero.
//! - **Services**: one struct per resource, exposing the async operations
//!   the remote API supports (`count`, `list`, `get`, `create`, `update`,
//!   `delete`). Services share one [`RequestExecutor`], which owns the HTTP
//!   client, the authentication headers, and response decoding.
//!
//! Every call is exactly one network round trip. There is no retry,
//! batching, or caching; remote errors come back as
//! [`ClientError::Remote`] with the status code and error payload intact.
//!
//! # Getting Started
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopify_rest::{CollectFilter, CollectService, Credentials, RequestExecutor};
//!
//! let credentials = Credentials::builder()
//!     .shop("my-store")
//!     .access_token("shpat_abc123")
//!     .build()?;
//!
//! let executor = Arc::new(RequestExecutor::new(&credentials));
//! let collects = CollectService::new(Arc::clone(&executor));
//!
//! // Count all collects in one collection.
//! let filter = CollectFilter {
//!     collection_id: Some(841564295),
//!     ..CollectFilter::default()
//! };
//! let total = collects.count(Some(&filter)).await?;
//! ```
//!
//! # Authentication
//!
//! The client authenticates with a per-shop Admin API access token, sent as
//! the `X-Shopify-Access-Token` header on every request. Acquiring the
//! token (OAuth, custom app install) is up to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

pub use client::{ApiRequest, ApiResponse, ClientError, InvalidRequestError, Method, RequestExecutor};
pub use config::{AccessToken, BaseUrl, Credentials, CredentialsBuilder, ShopDomain};
pub use error::ConfigError;
pub use resources::{
    Collect, CollectFilter, CollectService, CollectionSortOrder, CustomCollection,
    CustomCollectionFilter, CustomCollectionService, PrerequisiteQuantityRatio,
    PrerequisiteToEntitlementPurchase, PrerequisiteValueQuantityRange, PrerequisiteValueRange,
    PriceRule, PriceRuleAllocationMethod, PriceRuleCustomerSelection, PriceRuleFilter,
    PriceRuleService, PriceRuleTargetSelection, PriceRuleTargetType, PriceRuleValueType, Product,
    ProductFilter, ProductService, ProductStatus,
};
