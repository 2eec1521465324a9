use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::BusinessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Office,
    Medical,
    Retail,
    Restaurant,
    Gym,
    Salon,
    Warehouse,
    Other,
}

impl BusinessType {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Office,
            Self::Medical,
            Self::Retail,
            Self::Restaurant,
            Self::Gym,
            Self::Salon,
            Self::Warehouse,
            Self::Other,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Medical => "medical",
            Self::Retail => "retail",
            Self::Restaurant => "restaurant",
            Self::Gym => "gym",
            Self::Salon => "salon",
            Self::Warehouse => "warehouse",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Medical => "Medical",
            Self::Retail => "Retail",
            Self::Restaurant => "Restaurant",
            Self::Gym => "Gym",
            Self::Salon => "Salon",
            Self::Warehouse => "Warehouse",
            Self::Other => "Other",
        }
    }

    /// Hygiene-critical businesses that need at least daily service.
    pub const fn is_hygiene_critical(self) -> bool {
        matches!(self, Self::Medical | Self::Restaurant)
    }
}

impl FromStr for BusinessType {
    type Err = BusinessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .ok_or_else(|| BusinessError::UnknownBusinessType(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// Visitor traffic is reported over the same periods as cleaning.
pub type VisitorFrequency = CleaningFrequency;

impl CleaningFrequency {
    pub const fn ordered() -> [Self; 3] {
        [Self::Daily, Self::Weekly, Self::Monthly]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Days covered by one period.
    pub const fn daily_divisor(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }
}

impl FromStr for CleaningFrequency {
    type Err = BusinessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(BusinessError::UnknownCleaningFrequency(value.to_string())),
        }
    }
}

/// Normalizes a visitor count to an average per-day rate.
pub fn daily_equivalent(visitor_count: u32, frequency: VisitorFrequency) -> f64 {
    f64::from(visitor_count) / f64::from(frequency.daily_divisor())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorType {
    Carpet,
    Hardwood,
    Tile,
    Vinyl,
    Concrete,
    Laminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Quality,
    Price,
    Reliability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "6-month")]
    SixMonth,
    #[serde(rename = "12-month")]
    TwelveMonth,
}

/// Commercial booking inputs as collected by the wizard.
///
/// Every field stays optional while the customer works through the form;
/// validation reports what is still missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub square_footage: Option<f64>,
    #[serde(default)]
    pub cleaning_frequency: Option<CleaningFrequency>,
    #[serde(default)]
    pub cleaning_count: Option<u32>,
    #[serde(default)]
    pub floor_type: Option<FloorType>,
    #[serde(default)]
    pub visitor_count: Option<u32>,
    #[serde(default)]
    pub visitor_frequency: Option<VisitorFrequency>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub contract_type: Option<ContractType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_visitors_per_day() {
        assert_eq!(daily_equivalent(100, CleaningFrequency::Daily), 100.0);
        assert_eq!(daily_equivalent(140, CleaningFrequency::Weekly), 20.0);
        assert_eq!(daily_equivalent(600, CleaningFrequency::Monthly), 20.0);
    }

    #[test]
    fn wire_tags_round_out_the_enums() {
        let details: BusinessDetails = serde_json::from_str(
            r#"{"businessType":"salon","contractType":"6-month","visitorFrequency":"weekly"}"#,
        )
        .unwrap();
        assert_eq!(details.business_type, Some(BusinessType::Salon));
        assert_eq!(details.contract_type, Some(ContractType::SixMonth));
        assert_eq!(details.visitor_frequency, Some(CleaningFrequency::Weekly));
        assert!(details.priority.is_none());

        assert!(matches!(
            "spa".parse::<BusinessType>(),
            Err(BusinessError::UnknownBusinessType(_))
        ));
        assert_eq!("Warehouse".parse::<BusinessType>(), Ok(BusinessType::Warehouse));
    }
}
