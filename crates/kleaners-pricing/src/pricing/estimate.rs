use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use super::catalog::{add_on_catalog, discount_catalog, AddOn, Discount, ADD_ON_MINUTES};
use super::domain::EstimateProperty;
use super::PricingError;

pub const MINIMUM_BASE_PRICE: f64 = 80.0;
pub const BASE_DURATION_MINUTES: u32 = 120;
pub const DEFAULT_TAX_RATE: f64 = 0.08;
pub const DEFAULT_VALIDITY_DAYS: u32 = 7;
pub const CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    HomeCleaning,
    OfficeCleaning,
    DeepCleaning,
    /// Service types without a per-area rate; they price at the minimum.
    #[serde(other)]
    Other,
}

impl ServiceType {
    /// Price per square foot.
    pub const fn rate(self) -> f64 {
        match self {
            Self::HomeCleaning => 0.15,
            Self::OfficeCleaning => 0.12,
            Self::DeepCleaning => 0.25,
            Self::Other => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeCleaning => "Home Cleaning",
            Self::OfficeCleaning => "Office Cleaning",
            Self::DeepCleaning => "Deep Cleaning",
            Self::Other => "Other Service",
        }
    }
}

impl FromStr for ServiceType {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "HOME_CLEANING" | "HOME" => Ok(Self::HomeCleaning),
            "OFFICE_CLEANING" | "OFFICE" => Ok(Self::OfficeCleaning),
            "DEEP_CLEANING" | "DEEP" => Ok(Self::DeepCleaning),
            _ => Err(PricingError::UnknownServiceType(value.to_string())),
        }
    }
}

/// How often the booked service recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    #[serde(other)]
    OneTime,
}

impl ServiceFrequency {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Weekly => 0.8,
            Self::BiWeekly => 0.9,
            Self::Monthly | Self::OneTime => 1.0,
        }
    }
}

impl FromStr for ServiceFrequency {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "WEEKLY" => Ok(Self::Weekly),
            "BI_WEEKLY" | "BIWEEKLY" => Ok(Self::BiWeekly),
            "MONTHLY" => Ok(Self::Monthly),
            "ONE_TIME" | "ONCE" => Ok(Self::OneTime),
            _ => Err(PricingError::UnknownFrequency(value.to_string())),
        }
    }
}

/// Controls how the taxed total is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// `breakdown.total` is `round(total * (1 + tax))`, which can differ from
    /// `totalPrice + taxes` by one unit. Matches the booking UI.
    #[default]
    Compatible,
    /// `breakdown.total` is always `totalPrice + taxes`.
    Consistent,
}

impl FromStr for RoundingPolicy {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compatible" => Ok(Self::Compatible),
            "consistent" => Ok(Self::Consistent),
            _ => Err(PricingError::UnknownRoundingPolicy(value.to_string())),
        }
    }
}

/// Dials for the estimate calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateSettings {
    pub tax_rate: f64,
    pub validity_days: u32,
    pub rounding: RoundingPolicy,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            validity_days: DEFAULT_VALIDITY_DAYS,
            rounding: RoundingPolicy::default(),
        }
    }
}

/// Everything the wizard has collected by the estimate step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default)]
    pub property: EstimateProperty,
    pub service_type: ServiceType,
    pub frequency: ServiceFrequency,
    #[serde(default)]
    pub add_ons: Vec<String>,
    #[serde(default)]
    pub discounts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub base_service: u32,
    pub add_ons: u32,
    pub frequency_multiplier: f64,
    pub package_multiplier: f64,
    pub discounts: u32,
    pub taxes: u32,
    pub total: u32,
}

/// Priced quote; rebuilt from scratch on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub service_type: ServiceType,
    pub base_price: u32,
    /// Visit length in minutes.
    pub duration: u32,
    pub frequency: ServiceFrequency,
    pub add_ons: Vec<AddOn>,
    pub discounts: Vec<Discount>,
    /// Pre-tax total.
    pub total_price: u32,
    pub currency: String,
    pub valid_until: DateTime<Utc>,
    pub breakdown: EstimateBreakdown,
}

impl Estimate {
    pub fn summary(&self) -> String {
        format!(
            "{} ({:?}): {} {} before tax, {} {} with tax, {} min",
            self.service_type.label(),
            self.frequency,
            self.total_price,
            self.currency,
            self.breakdown.total,
            self.currency,
            self.duration
        )
    }
}

fn round_currency(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Returns `(subtotal, discount_total, total)`. Discounts are sized on the
/// pre-frequency amount and taken off after the frequency multiplier; the
/// total never goes below zero.
fn discounted_total(
    pre_discount: f64,
    frequency_multiplier: f64,
    discounts: &[Discount],
) -> (f64, f64, f64) {
    let discount_total: f64 = discounts
        .iter()
        .map(|discount| discount.amount(pre_discount))
        .sum();
    let subtotal = pre_discount * frequency_multiplier;

    (subtotal, discount_total, (subtotal - discount_total).max(0.0))
}

/// Stateless calculator applying [`EstimateSettings`] to a request.
#[derive(Debug, Clone, Default)]
pub struct EstimateCalculator {
    settings: EstimateSettings,
}

impl EstimateCalculator {
    pub fn new(settings: EstimateSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EstimateSettings {
        &self.settings
    }

    pub fn compute(&self, request: &EstimateRequest) -> Estimate {
        self.compute_at(request, Utc::now())
    }

    pub fn compute_at(&self, request: &EstimateRequest, now: DateTime<Utc>) -> Estimate {
        let square_footage = request.property.effective_square_footage();
        let floors = request.property.effective_floors();

        let base_price = (square_footage * request.service_type.rate() * f64::from(floors))
            .max(MINIMUM_BASE_PRICE);
        let frequency_multiplier = request.frequency.multiplier();

        let add_ons: Vec<AddOn> = add_on_catalog()
            .into_iter()
            .filter(|add_on| request.add_ons.contains(&add_on.id))
            .map(|add_on| AddOn {
                selected: true,
                ..add_on
            })
            .collect();
        let add_ons_total: f64 = add_ons.iter().map(|add_on| add_on.price).sum();

        let discounts: Vec<Discount> = discount_catalog()
            .into_iter()
            .filter(|discount| request.discounts.contains(&discount.id))
            .collect();

        for id in &request.add_ons {
            if !add_ons.iter().any(|add_on| &add_on.id == id) {
                warn!(add_on = %id, "ignoring unknown add-on");
            }
        }
        for id in &request.discounts {
            if !discounts.iter().any(|discount| &discount.id == id) {
                warn!(discount = %id, "ignoring unknown discount");
            }
        }

        let pre_discount = base_price + add_ons_total;
        let (subtotal, discount_total, total) =
            discounted_total(pre_discount, frequency_multiplier, &discounts);

        let total_price = round_currency(total);
        let taxes = round_currency(total * self.settings.tax_rate);
        let taxed_total = match self.settings.rounding {
            RoundingPolicy::Compatible => round_currency(total * (1.0 + self.settings.tax_rate)),
            RoundingPolicy::Consistent => total_price + taxes,
        };

        let duration = BASE_DURATION_MINUTES + ADD_ON_MINUTES * request.add_ons.len() as u32;

        debug!(
            service_type = ?request.service_type,
            square_footage,
            floors,
            base_price,
            subtotal,
            discount_total,
            total,
            "computed estimate"
        );

        Estimate {
            service_type: request.service_type,
            base_price: round_currency(base_price),
            duration,
            frequency: request.frequency,
            add_ons,
            discounts,
            total_price,
            currency: CURRENCY.to_string(),
            valid_until: now
                .checked_add_signed(Duration::days(i64::from(self.settings.validity_days)))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            breakdown: EstimateBreakdown {
                base_service: round_currency(base_price),
                add_ons: round_currency(add_ons_total),
                frequency_multiplier,
                package_multiplier: 1.0,
                discounts: round_currency(discount_total),
                taxes,
                total: taxed_total,
            },
        }
    }
}

/// Computes an estimate with the default settings and the current clock.
pub fn compute_estimate(
    property: EstimateProperty,
    service_type: ServiceType,
    frequency: ServiceFrequency,
    selected_add_ons: &[&str],
    selected_discounts: &[&str],
) -> Estimate {
    let request = EstimateRequest {
        property,
        service_type,
        frequency,
        add_ons: selected_add_ons.iter().map(|id| id.to_string()).collect(),
        discounts: selected_discounts.iter().map(|id| id.to_string()).collect(),
    };
    EstimateCalculator::default().compute(&request)
}
