use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{daily_equivalent, BusinessDetails, BusinessType, CleaningFrequency};

pub const MIN_SQUARE_FOOTAGE: f64 = 50.0;
pub const MAX_SQUARE_FOOTAGE: f64 = 1000.0;
pub const MIN_CLEANING_COUNT: u32 = 1;
pub const MAX_CLEANING_COUNT: u32 = 20;

/// Errors block the booking; warnings are advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn validate_business_details(details: &BusinessDetails) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if details.business_type.is_none() {
        errors.push("Business type is required".to_string());
    }

    match details.square_footage {
        None => errors.push("Square footage is required".to_string()),
        Some(value) if !(MIN_SQUARE_FOOTAGE..=MAX_SQUARE_FOOTAGE).contains(&value) => {
            errors.push(format!(
                "Square footage must be between {MIN_SQUARE_FOOTAGE} and {MAX_SQUARE_FOOTAGE}"
            ));
        }
        Some(_) => {}
    }

    if details.cleaning_frequency.is_none() {
        errors.push("Cleaning frequency is required".to_string());
    }

    match details.cleaning_count {
        None => errors.push("Number of cleanings is required".to_string()),
        Some(count) if !(MIN_CLEANING_COUNT..=MAX_CLEANING_COUNT).contains(&count) => {
            errors.push(format!(
                "Number of cleanings must be between {MIN_CLEANING_COUNT} and {MAX_CLEANING_COUNT}"
            ));
        }
        Some(_) => {}
    }

    if details.floor_type.is_none() {
        errors.push("Floor type is required".to_string());
    }

    match details.visitor_count {
        None => errors.push("Visitor count is required".to_string()),
        Some(0) => errors.push("Visitor count must be at least 1".to_string()),
        Some(_) => {}
    }

    if details.visitor_frequency.is_none() {
        errors.push("Visitor frequency is required".to_string());
    }

    if details.priority.is_none() {
        errors.push("Priority is required".to_string());
    }

    if let (Some(cleaning_frequency), Some(visitor_count), Some(visitor_frequency)) = (
        details.cleaning_frequency,
        details.visitor_count,
        details.visitor_frequency,
    ) {
        warnings.extend(validate_frequency_visitor_match(
            cleaning_frequency,
            visitor_count,
            visitor_frequency,
        ));
    }

    if let (Some(business_type), Some(cleaning_frequency)) =
        (details.business_type, details.cleaning_frequency)
    {
        warnings.extend(validate_business_type_frequency(
            business_type,
            cleaning_frequency,
        ));
    }

    debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validated business details"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Warns when visitor traffic and cleaning cadence are out of step.
pub fn validate_frequency_visitor_match(
    cleaning_frequency: CleaningFrequency,
    visitor_count: u32,
    visitor_frequency: CleaningFrequency,
) -> Option<String> {
    let daily_visitors = daily_equivalent(visitor_count, visitor_frequency);
    let rounded = daily_visitors.round();

    match cleaning_frequency {
        CleaningFrequency::Monthly if daily_visitors > 20.0 => Some(format!(
            "With about {rounded} visitors per day, monthly cleaning may not keep up. Consider weekly cleaning."
        )),
        CleaningFrequency::Weekly if daily_visitors > 100.0 => Some(format!(
            "With about {rounded} visitors per day, weekly cleaning may not keep up. Consider daily cleaning."
        )),
        CleaningFrequency::Daily if daily_visitors < 5.0 => Some(format!(
            "With about {rounded} visitors per day, daily cleaning may be more than you need. Consider weekly cleaning for cost efficiency."
        )),
        _ => None,
    }
}

/// Warns when a business type's hygiene needs don't match the cadence.
pub fn validate_business_type_frequency(
    business_type: BusinessType,
    cleaning_frequency: CleaningFrequency,
) -> Option<String> {
    match (business_type, cleaning_frequency) {
        (kind, CleaningFrequency::Monthly) if kind.is_hygiene_critical() => Some(format!(
            "{} businesses usually need more frequent cleaning than monthly to meet hygiene standards.",
            kind.label()
        )),
        (BusinessType::Warehouse, CleaningFrequency::Daily) => Some(
            "Warehouses rarely need daily cleaning. Weekly or monthly service is usually more cost effective."
                .to_string(),
        ),
        _ => None,
    }
}
