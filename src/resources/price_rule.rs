//! Price rule resource: discount rules with prerequisites and entitlements.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{to_query, ApiRequest, ClientError, Method, RequestExecutor};

/// How a price rule's value is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleValueType {
    /// A fixed amount off, e.g. `-10.00`.
    FixedAmount,
    /// A percentage off, e.g. `-25.0`.
    Percentage,
}

/// How the discount is allocated across line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleAllocationMethod {
    /// Applied once to each matching line item.
    Each,
    /// Applied once across the whole order.
    Across,
}

/// Which customers the rule applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleCustomerSelection {
    /// Every customer.
    All,
    /// Only customers listed in `prerequisite_customer_ids`.
    Prerequisite,
}

/// What the discount targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetType {
    /// Product line items.
    LineItem,
    /// The shipping line.
    ShippingLine,
}

/// How the target set is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetSelection {
    /// Every item of the target type.
    All,
    /// Only the entitled products, variants, or collections.
    Entitled,
}

/// A decimal range bound, as the remote API represents it (strings).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrerequisiteValueRange {
    /// Lower bound, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal_to: Option<String>,
}

/// An integral quantity range with both bounds optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrerequisiteValueQuantityRange {
    /// Upper bound, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal_to: Option<i64>,

    /// Lower bound, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal_to: Option<i64>,
}

/// The buy/get ratio of a "buy X get Y" rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrerequisiteQuantityRatio {
    /// How many prerequisite items must be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_quantity: Option<i64>,

    /// How many entitled items the discount then covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_quantity: Option<i32>,
}

/// Minimum purchase amount required before the rule applies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrerequisiteToEntitlementPurchase {
    /// The minimum subtotal, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_amount: Option<String>,
}

/// A discount price rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceRule {
    /// The unique identifier of the price rule.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The title of the price rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// How `value` is interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PriceRuleValueType>,

    /// The discount value; always negative, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Which customers the rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_selection: Option<PriceRuleCustomerSelection>,

    /// What the discount targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<PriceRuleTargetType>,

    /// How the target set is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<PriceRuleTargetSelection>,

    /// How the discount is allocated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<PriceRuleAllocationMethod>,

    /// How many times the discount can apply per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_limit: Option<i32>,

    /// Whether each customer may use the rule only once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once_per_customer: Option<bool>,

    /// Total number of times the rule may be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,

    /// When the rule becomes active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// When the rule expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    /// Minimum order subtotal before the rule applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_subtotal_range: Option<PrerequisiteValueRange>,

    /// Required cart quantity before the rule applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_quantity_range: Option<PrerequisiteValueQuantityRange>,

    /// Maximum shipping price for the rule to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_shipping_price_range: Option<PrerequisiteValueRange>,

    /// Collections that must be in the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_collection_ids: Option<Vec<u64>>,

    /// Variants that must be in the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_variant_ids: Option<Vec<u64>>,

    /// Products that must be in the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_product_ids: Option<Vec<u64>>,

    /// Customers eligible when `customer_selection` is `Prerequisite`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_customer_ids: Option<Vec<u64>>,

    /// Collections the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_collection_ids: Option<Vec<u64>>,

    /// Products the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_product_ids: Option<Vec<u64>>,

    /// Variants the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_variant_ids: Option<Vec<u64>>,

    /// Shipping countries the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_country_ids: Option<Vec<u64>>,

    /// Minimum purchase amount for "spend X get Y" rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_to_entitlement_purchase: Option<PrerequisiteToEntitlementPurchase>,

    /// The buy/get ratio for "buy X get Y" rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_to_entitlement_quantity_ratio: Option<PrerequisiteQuantityRatio>,

    /// How many times the rule has been used.
    #[serde(skip_serializing)]
    pub times_used: Option<i32>,

    /// When the rule was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the rule was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL GID of the rule.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Filter options for listing and counting price rules.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct PriceRuleFilter {
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only rules with an id greater than this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

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

    /// Starting at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_min: Option<DateTime<Utc>>,

    /// Starting at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_max: Option<DateTime<Utc>>,

    /// Ending at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_min: Option<DateTime<Utc>>,

    /// Ending at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_max: Option<DateTime<Utc>>,

    /// Used exactly this many times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_used: Option<i32>,

    /// Restrict the returned fields to this subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Service for the price rule resource.
#[derive(Debug, Clone)]
pub struct PriceRuleService {
    executor: Arc<RequestExecutor>,
}

impl PriceRuleService {
    const SINGULAR: &'static str = "price_rule";
    const PLURAL: &'static str = "price_rules";

    /// Creates a service backed by the given executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Counts price rules matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a body without a `count` field.
    pub async fn count(&self, filter: Option<&PriceRuleFilter>) -> Result<u64, ClientError> {
        let request = ApiRequest::get(format!("{}/count", Self::PLURAL))
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.count(request).await
    }

    /// Lists price rules matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx response, or
    /// a malformed body.
    pub async fn list(
        &self,
        filter: Option<&PriceRuleFilter>,
    ) -> Result<Vec<PriceRule>, ClientError> {
        let request = ApiRequest::get(Self::PLURAL)
            .query_params(filter.map_or_else(|| Ok(Vec::new()), to_query)?)
            .build();
        self.executor.get_list(request, Self::PLURAL).await
    }

    /// Fetches one price rule by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no rule has
    /// this id.
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<PriceRule, ClientError> {
        let mut builder = ApiRequest::get(format!("{}/{id}", Self::PLURAL));
        if let Some(fields) = fields {
            builder = builder.query_param("fields", fields);
        }
        self.executor.get_one(builder.build(), Self::SINGULAR).await
    }

    /// Creates a price rule, returning it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 422 when required fields
    /// are missing or inconsistent.
    pub async fn create(&self, rule: &PriceRule) -> Result<PriceRule, ClientError> {
        self.executor
            .send_entity(Method::Post, Self::PLURAL, Self::SINGULAR, rule)
            .await
    }

    /// Updates the price rule with the given id, returning the updated
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no rule has
    /// this id, or 422 on invalid fields.
    pub async fn update(&self, id: u64, rule: &PriceRule) -> Result<PriceRule, ClientError> {
        self.executor
            .send_entity(
                Method::Put,
                format!("{}/{id}", Self::PLURAL),
                Self::SINGULAR,
                rule,
            )
            .await
    }

    /// Deletes the price rule with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when no rule has
    /// this id.
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        self.executor
            .delete(format!("{}/{id}", Self::PLURAL))
            .await
    }
}
