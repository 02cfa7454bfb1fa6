//! Resource entities and their services.
//!
//! Each resource module pairs a flat entity type with a service struct
//! exposing the operations the remote API supports for it. Services are
//! thin: they build a request against the resource's fixed path templates
//! and hand it to the shared [`RequestExecutor`](crate::client::RequestExecutor).

pub mod collect;
pub mod custom_collection;
pub mod price_rule;
pub mod product;

pub use collect::{Collect, CollectFilter, CollectService};
pub use custom_collection::{
    CollectionSortOrder, CustomCollection, CustomCollectionFilter, CustomCollectionService,
};
pub use price_rule::{
    PrerequisiteQuantityRatio, PrerequisiteToEntitlementPurchase, PrerequisiteValueQuantityRange,
    PrerequisiteValueRange, PriceRule, PriceRuleAllocationMethod, PriceRuleCustomerSelection,
    PriceRuleFilter, PriceRuleService, PriceRuleTargetSelection, PriceRuleTargetType,
    PriceRuleValueType,
};
pub use product::{Product, ProductFilter, ProductService, ProductStatus};
