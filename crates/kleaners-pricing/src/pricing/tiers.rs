use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PricingError;

/// Discrete pricing band keyed by property square footage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertySizeTier {
    #[serde(rename = "TIER_1")]
    Tier1,
    #[serde(rename = "TIER_2")]
    Tier2,
    #[serde(rename = "TIER_3")]
    Tier3,
    #[serde(rename = "TIER_4")]
    Tier4,
    #[serde(rename = "TIER_5")]
    Tier5,
    /// Custom-quote sentinel: sizes outside the catalog carry no base price.
    #[serde(rename = "TIER_6")]
    Tier6,
}

impl PropertySizeTier {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Tier1,
            Self::Tier2,
            Self::Tier3,
            Self::Tier4,
            Self::Tier5,
            Self::Tier6,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Tier1 => "TIER_1",
            Self::Tier2 => "TIER_2",
            Self::Tier3 => "TIER_3",
            Self::Tier4 => "TIER_4",
            Self::Tier5 => "TIER_5",
            Self::Tier6 => "TIER_6",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "50-69",
            Self::Tier2 => "70-89",
            Self::Tier3 => "90-109",
            Self::Tier4 => "110-129",
            Self::Tier5 => "130-149",
            Self::Tier6 => "150+ (custom quote)",
        }
    }

    /// Half-open `[start, end)` band; `None` for the custom-quote sentinel.
    pub const fn range(self) -> Option<(u32, u32)> {
        match self {
            Self::Tier1 => Some((50, 70)),
            Self::Tier2 => Some((70, 90)),
            Self::Tier3 => Some((90, 110)),
            Self::Tier4 => Some((110, 130)),
            Self::Tier5 => Some((130, 150)),
            Self::Tier6 => None,
        }
    }

    pub const fn base_price(self) -> u32 {
        match self {
            Self::Tier1 => 60,
            Self::Tier2 => 80,
            Self::Tier3 => 100,
            Self::Tier4 => 120,
            Self::Tier5 => 140,
            Self::Tier6 => 0,
        }
    }

    pub const fn is_custom_quote(self) -> bool {
        matches!(self, Self::Tier6)
    }
}

impl FromStr for PropertySizeTier {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|tier| tier.tag() == normalized)
            .ok_or_else(|| PricingError::UnknownTier(value.to_string()))
    }
}

/// Service intensity applied on top of a tier's base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffortLevel {
    Basic,
    Standard,
    Kleaners,
}

impl EffortLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Basic, Self::Standard, Self::Kleaners]
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Basic => 1.0,
            Self::Standard => 1.5,
            Self::Kleaners => 2.0,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Standard => "STANDARD",
            Self::Kleaners => "KLEANERS",
        }
    }
}

impl FromStr for EffortLevel {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(Self::Basic),
            "STANDARD" => Ok(Self::Standard),
            "KLEANERS" => Ok(Self::Kleaners),
            _ => Err(PricingError::UnknownEffortLevel(value.to_string())),
        }
    }
}

/// Prices for one tier at every effort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortPrices {
    pub basic: u32,
    pub standard: u32,
    pub kleaners: u32,
}

/// Row of the published price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTableRow {
    pub tier: PropertySizeTier,
    pub label: &'static str,
    pub requires_custom_quote: bool,
    pub prices: EffortPrices,
}

/// Classifies square footage into a size tier.
///
/// Anything outside `[50, 150)` (including NaN and sizes below 50) lands in
/// [`PropertySizeTier::Tier6`].
pub fn size_tier(square_footage: f64) -> PropertySizeTier {
    PropertySizeTier::ordered()
        .into_iter()
        .find(|tier| match tier.range() {
            Some((start, end)) => square_footage >= f64::from(start) && square_footage < f64::from(end),
            None => false,
        })
        .unwrap_or(PropertySizeTier::Tier6)
}

pub fn requires_custom_quote(square_footage: f64) -> bool {
    square_footage >= 150.0
}

pub fn calculate_price(tier: PropertySizeTier, effort: EffortLevel) -> u32 {
    if tier.is_custom_quote() {
        return 0;
    }

    (f64::from(tier.base_price()) * effort.multiplier()).round() as u32
}

pub fn price_for_all_efforts(tier: PropertySizeTier) -> EffortPrices {
    EffortPrices {
        basic: calculate_price(tier, EffortLevel::Basic),
        standard: calculate_price(tier, EffortLevel::Standard),
        kleaners: calculate_price(tier, EffortLevel::Kleaners),
    }
}

/// Tag-based entry point for callers holding raw strings from a form.
pub fn calculate_price_for_tags(tier: &str, effort: &str) -> Result<u32, PricingError> {
    let tier = tier.parse::<PropertySizeTier>()?;
    let effort = effort.parse::<EffortLevel>()?;
    Ok(calculate_price(tier, effort))
}

pub fn price_table() -> Vec<PriceTableRow> {
    PropertySizeTier::ordered()
        .into_iter()
        .map(|tier| PriceTableRow {
            tier,
            label: tier.label(),
            requires_custom_quote: tier.is_custom_quote(),
            prices: price_for_all_efforts(tier),
        })
        .collect()
}
