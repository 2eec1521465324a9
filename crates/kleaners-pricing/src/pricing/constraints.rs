use serde::{Deserialize, Serialize};

use super::domain::PropertyDetails;

/// Room ceilings implied by a property's floor area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyConstraints {
    pub max_bedrooms: u32,
    pub max_bathrooms: u32,
    pub description: String,
}

/// Advisory check of stated room counts; the input is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub constraints: PropertyConstraints,
}

pub fn property_constraints(square_footage: f64) -> PropertyConstraints {
    let (max_bedrooms, max_bathrooms, description) = if square_footage < 70.0 {
        (2, 1, "Compact property (50-69): up to 2 bedrooms and 1 bathroom")
    } else if square_footage < 90.0 {
        (2, 2, "Small property (70-89): up to 2 bedrooms and 2 bathrooms")
    } else if square_footage < 110.0 {
        (3, 2, "Medium property (90-109): up to 3 bedrooms and 2 bathrooms")
    } else if square_footage < 130.0 {
        (4, 3, "Large property (110-129): up to 4 bedrooms and 3 bathrooms")
    } else if square_footage <= 150.0 {
        (4, 4, "Extra large property (130-150): up to 4 bedrooms and 4 bathrooms")
    } else {
        (5, 5, "Large property: flexible room configuration, up to 5 bedrooms and 5 bathrooms")
    };

    PropertyConstraints {
        max_bedrooms,
        max_bathrooms,
        description: description.to_string(),
    }
}

pub fn validate_property_details(property: &PropertyDetails) -> PropertyValidation {
    let constraints = property_constraints(property.square_footage);
    let mut errors = Vec::new();

    if property.bedrooms > constraints.max_bedrooms {
        errors.push(format!(
            "Maximum {} bedrooms allowed for a property of this size ({} requested)",
            constraints.max_bedrooms, property.bedrooms
        ));
    }

    if property.bathrooms > constraints.max_bathrooms {
        errors.push(format!(
            "Maximum {} bathrooms allowed for a property of this size ({} requested)",
            constraints.max_bathrooms, property.bathrooms
        ));
    }

    PropertyValidation {
        is_valid: errors.is_empty(),
        errors,
        constraints,
    }
}
