use serde::{Deserialize, Serialize};

use super::domain::CleaningFrequency;

/// Inclusive slider bounds for a count input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl RangeLimits {
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub fn visitor_count_limits(frequency: CleaningFrequency) -> RangeLimits {
    match frequency {
        CleaningFrequency::Daily => RangeLimits {
            min: 1,
            max: 200,
            step: 1,
        },
        CleaningFrequency::Weekly => RangeLimits {
            min: 1,
            max: 500,
            step: 10,
        },
        CleaningFrequency::Monthly => RangeLimits {
            min: 1,
            max: 1000,
            step: 25,
        },
    }
}

pub fn cleaning_count_limits(frequency: CleaningFrequency) -> RangeLimits {
    let max = match frequency {
        CleaningFrequency::Daily => 5,
        CleaningFrequency::Weekly => 14,
        CleaningFrequency::Monthly => 8,
    };

    RangeLimits {
        min: 1,
        max,
        step: 1,
    }
}
