//! Commercial booking rules: per-business-type defaults, frequency-dependent
//! input limits, validation, and cleaning-frequency recommendations.

pub mod defaults;
pub mod domain;
pub mod limits;
pub mod recommendation;
pub mod validation;

pub use defaults::{apply_business_defaults, business_type_defaults, BusinessTypeDefaults};
pub use domain::{
    daily_equivalent, BusinessDetails, BusinessType, CleaningFrequency, ContractType, FloorType,
    Priority, VisitorFrequency,
};
pub use limits::{cleaning_count_limits, visitor_count_limits, RangeLimits};
pub use recommendation::{recommended_frequency, Confidence, FrequencyRecommendation};
pub use validation::{
    validate_business_details, validate_business_type_frequency, validate_frequency_visitor_match,
    ValidationResult,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusinessError {
    #[error("unknown business type '{0}'")]
    UnknownBusinessType(String),
    #[error("unknown cleaning frequency '{0}'")]
    UnknownCleaningFrequency(String),
}
