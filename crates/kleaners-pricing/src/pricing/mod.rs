//! Residential and commercial cleaning estimates.
//!
//! Size tiers and effort levels drive the quick price table shown while a
//! customer is still describing the property; the estimate calculator
//! produces the full breakdown once service type, frequency, add-ons, and
//! discounts are known.

pub mod catalog;
pub mod constraints;
pub mod domain;
pub mod estimate;
pub mod tiers;

pub use catalog::{add_on_catalog, discount_catalog, AddOn, Discount, DiscountKind};
pub use constraints::{
    property_constraints, validate_property_details, PropertyConstraints, PropertyValidation,
};
pub use domain::{EstimateProperty, OfficeDetails, PropertyDetails};
pub use estimate::{
    compute_estimate, Estimate, EstimateBreakdown, EstimateCalculator, EstimateRequest,
    EstimateSettings, RoundingPolicy, ServiceFrequency, ServiceType,
};
pub use tiers::{
    calculate_price, calculate_price_for_tags, price_for_all_efforts, price_table,
    requires_custom_quote, size_tier, EffortLevel, EffortPrices, PriceTableRow, PropertySizeTier,
};

/// Raised when a caller hands the engine a tag outside the published catalogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("unknown property size tier '{0}'")]
    UnknownTier(String),
    #[error("unknown effort level '{0}'")]
    UnknownEffortLevel(String),
    #[error("unknown service type '{0}'")]
    UnknownServiceType(String),
    #[error("unknown service frequency '{0}'")]
    UnknownFrequency(String),
    #[error("unknown rounding policy '{0}'")]
    UnknownRoundingPolicy(String),
}
