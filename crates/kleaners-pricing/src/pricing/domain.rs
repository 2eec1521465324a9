use serde::{Deserialize, Serialize};

use super::tiers::{size_tier, PropertySizeTier};
use crate::business::BusinessType;

pub const DEFAULT_SQUARE_FOOTAGE: f64 = 1000.0;
pub const DEFAULT_FLOORS: u32 = 1;

/// Residential property captured by the booking wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_tier: Option<PropertySizeTier>,
}

impl PropertyDetails {
    /// Returns a copy with `size_tier` assigned from the square footage.
    pub fn classified(mut self) -> Self {
        self.size_tier = Some(size_tier(self.square_footage));
        self
    }
}

/// Commercial property; rooms are described by use rather than bedrooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeDetails {
    pub workstations: u32,
    pub meeting_rooms: u32,
    pub common_areas: u32,
    pub has_kitchen: bool,
    pub has_reception: bool,
    pub business_type: BusinessType,
    pub square_footage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
}

/// The slice of property data the estimate calculator reads.
///
/// Missing, zero, or non-finite values fall back to 1000 sq ft and a single
/// floor so an estimate can always be recomputed mid-wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateProperty {
    #[serde(default)]
    pub square_footage: Option<f64>,
    #[serde(default)]
    pub floors: Option<u32>,
}

impl EstimateProperty {
    pub fn effective_square_footage(&self) -> f64 {
        self.square_footage
            .filter(|value| value.is_finite() && *value != 0.0)
            .unwrap_or(DEFAULT_SQUARE_FOOTAGE)
    }

    pub fn effective_floors(&self) -> u32 {
        self.floors
            .filter(|floors| *floors > 0)
            .unwrap_or(DEFAULT_FLOORS)
    }
}

impl From<&PropertyDetails> for EstimateProperty {
    fn from(details: &PropertyDetails) -> Self {
        Self {
            square_footage: Some(details.square_footage),
            floors: details.floors,
        }
    }
}

impl From<&OfficeDetails> for EstimateProperty {
    fn from(details: &OfficeDetails) -> Self {
        Self {
            square_footage: Some(details.square_footage),
            floors: details.floors,
        }
    }
}
