use serde::{Deserialize, Serialize};

use super::domain::{daily_equivalent, BusinessType, CleaningFrequency, VisitorFrequency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRecommendation {
    pub recommended: CleaningFrequency,
    pub reason: String,
    pub confidence: Confidence,
}

pub fn recommended_frequency(
    visitor_count: u32,
    visitor_frequency: VisitorFrequency,
    business_type: BusinessType,
) -> FrequencyRecommendation {
    let daily_visitors = daily_equivalent(visitor_count, visitor_frequency);
    let rounded = daily_visitors.round();

    if business_type.is_hygiene_critical() {
        return FrequencyRecommendation {
            recommended: CleaningFrequency::Daily,
            reason: format!(
                "{} businesses require daily cleaning to maintain hygiene standards (about {rounded} visitors per day).",
                business_type.label()
            ),
            confidence: Confidence::High,
        };
    }

    if business_type == BusinessType::Warehouse {
        return FrequencyRecommendation {
            recommended: CleaningFrequency::Monthly,
            reason: format!(
                "Warehouses typically need monthly deep cleaning (about {rounded} visitors per day)."
            ),
            confidence: Confidence::High,
        };
    }

    if daily_visitors >= 50.0 {
        FrequencyRecommendation {
            recommended: CleaningFrequency::Daily,
            reason: format!("High traffic of about {rounded} visitors per day calls for daily cleaning."),
            confidence: Confidence::Medium,
        }
    } else if daily_visitors >= 20.0 {
        FrequencyRecommendation {
            recommended: CleaningFrequency::Weekly,
            reason: format!("Moderate traffic of about {rounded} visitors per day suits weekly cleaning."),
            confidence: Confidence::Medium,
        }
    } else {
        FrequencyRecommendation {
            recommended: CleaningFrequency::Monthly,
            reason: format!("Light traffic of about {rounded} visitors per day can be covered by monthly cleaning."),
            confidence: Confidence::Low,
        }
    }
}
