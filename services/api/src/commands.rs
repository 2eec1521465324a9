use crate::infra::{
    parse_business_type, parse_cleaning_frequency, parse_service_frequency, parse_service_type,
};
use clap::Args;
use kleaners_pricing::business::{
    business_type_defaults, recommended_frequency, validate_business_type_frequency,
    validate_frequency_visitor_match, BusinessType, CleaningFrequency,
};
use kleaners_pricing::config::AppConfig;
use kleaners_pricing::error::AppError;
use kleaners_pricing::pricing::{
    price_for_all_efforts, price_table, property_constraints, requires_custom_quote, size_tier,
    Estimate, EstimateCalculator, EstimateProperty, EstimateRequest, ServiceFrequency,
    ServiceType,
};
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Property area; defaults to 1000 when omitted
    #[arg(long)]
    pub(crate) square_footage: Option<f64>,
    /// Number of floors to clean
    #[arg(long)]
    pub(crate) floors: Option<u32>,
    /// Service type (home, office, deep)
    #[arg(long, default_value = "home", value_parser = parse_service_type)]
    pub(crate) service_type: ServiceType,
    /// Visit frequency (one-time, weekly, bi-weekly, monthly)
    #[arg(long, default_value = "one-time", value_parser = parse_service_frequency)]
    pub(crate) frequency: ServiceFrequency,
    /// Add-on id from the catalog; repeat for several
    #[arg(long = "add-on")]
    pub(crate) add_ons: Vec<String>,
    /// Discount id from the catalog; repeat for several
    #[arg(long = "discount")]
    pub(crate) discounts: Vec<String>,
    /// Print the estimate as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TiersArgs {
    /// Show the tier, prices, and room limits for this property size
    #[arg(long)]
    pub(crate) square_footage: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Visitors per period
    #[arg(long)]
    pub(crate) visitors: u32,
    /// Period the visitor count covers (daily, weekly, monthly)
    #[arg(long, default_value = "daily", value_parser = parse_cleaning_frequency)]
    pub(crate) visitor_frequency: CleaningFrequency,
    /// Business type (office, medical, retail, restaurant, gym, salon, warehouse, other)
    #[arg(long, default_value = "other", value_parser = parse_business_type)]
    pub(crate) business_type: BusinessType,
    /// Currently planned cleaning frequency, checked against the visitor load
    #[arg(long, value_parser = parse_cleaning_frequency)]
    pub(crate) cleaning_frequency: Option<CleaningFrequency>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let calculator = EstimateCalculator::new(config.estimate);

    let estimate = calculator.compute(&quote_request(&args));

    if args.json {
        let rendered = serde_json::to_string_pretty(&estimate).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_estimate(&estimate));
    }

    Ok(())
}

pub(crate) fn run_tiers(args: TiersArgs) -> Result<(), AppError> {
    let report = match args.square_footage {
        Some(square_footage) => render_tier_lookup(square_footage),
        None => render_price_table(),
    };
    print!("{report}");
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    print!("{}", render_recommendation(&args));
    Ok(())
}

fn quote_request(args: &QuoteArgs) -> EstimateRequest {
    EstimateRequest {
        property: EstimateProperty {
            square_footage: args.square_footage,
            floors: args.floors,
        },
        service_type: args.service_type,
        frequency: args.frequency,
        add_ons: args.add_ons.clone(),
        discounts: args.discounts.clone(),
    }
}

// Writing into a String cannot fail, so the fmt::Result values below are dropped.

fn render_estimate(estimate: &Estimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", estimate.summary());
    let _ = writeln!(out, "- Base service: {}", estimate.breakdown.base_service);
    if estimate.add_ons.is_empty() {
        let _ = writeln!(out, "- Add-ons: none");
    } else {
        let _ = writeln!(out, "- Add-ons: {}", estimate.breakdown.add_ons);
        for add_on in &estimate.add_ons {
            let _ = writeln!(out, "    - {} ({})", add_on.name, add_on.price);
        }
    }
    let _ = writeln!(
        out,
        "- Frequency multiplier: {:.2}",
        estimate.breakdown.frequency_multiplier
    );
    if !estimate.discounts.is_empty() {
        let _ = writeln!(out, "- Discounts: -{}", estimate.breakdown.discounts);
        for discount in &estimate.discounts {
            let _ = writeln!(out, "    - {}", discount.name);
        }
    }
    let _ = writeln!(out, "- Taxes: {}", estimate.breakdown.taxes);
    let _ = writeln!(out, "- Total: {} {}", estimate.breakdown.total, estimate.currency);
    let _ = writeln!(
        out,
        "- Valid until: {}",
        estimate.valid_until.format("%Y-%m-%d %H:%M UTC")
    );
    out
}

fn render_tier_lookup(square_footage: f64) -> String {
    let tier = size_tier(square_footage);
    let constraints = property_constraints(square_footage);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Property size {square_footage} -> {} ({})",
        tier.tag(),
        tier.label()
    );
    if requires_custom_quote(square_footage) {
        let _ = writeln!(out, "- Requires a custom quote");
    } else if tier.is_custom_quote() {
        let _ = writeln!(out, "- Outside the priced size bands");
    } else {
        let prices = price_for_all_efforts(tier);
        let _ = writeln!(
            out,
            "- Basic {} | Standard {} | Kleaners {}",
            prices.basic, prices.standard, prices.kleaners
        );
    }
    let _ = writeln!(
        out,
        "- Up to {} bedrooms / {} bathrooms: {}",
        constraints.max_bedrooms, constraints.max_bathrooms, constraints.description
    );
    out
}

fn render_price_table() -> String {
    let mut out = String::from("Size tier price table\n");
    for row in price_table() {
        if row.requires_custom_quote {
            let _ = writeln!(out, "- {} {}: custom quote", row.tier.tag(), row.label);
        } else {
            let _ = writeln!(
                out,
                "- {} {}: basic {} | standard {} | kleaners {}",
                row.tier.tag(),
                row.label,
                row.prices.basic,
                row.prices.standard,
                row.prices.kleaners
            );
        }
    }
    out
}

fn render_recommendation(args: &RecommendArgs) -> String {
    let recommendation =
        recommended_frequency(args.visitors, args.visitor_frequency, args.business_type);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Recommended cleaning: {} ({:?} confidence)",
        recommendation.recommended.tag(),
        recommendation.confidence
    );
    let _ = writeln!(out, "- {}", recommendation.reason);

    let defaults = business_type_defaults(args.business_type);
    let _ = writeln!(
        out,
        "{} defaults: {}",
        args.business_type.label(),
        defaults.description
    );
    for feature in &defaults.features {
        let _ = writeln!(out, "    - {feature}");
    }

    if let Some(planned) = args.cleaning_frequency {
        let warnings: Vec<String> =
            validate_frequency_visitor_match(planned, args.visitors, args.visitor_frequency)
                .into_iter()
                .chain(validate_business_type_frequency(args.business_type, planned))
                .collect();
        if warnings.is_empty() {
            let _ = writeln!(out, "Planned {} cleaning fits the visitor load", planned.tag());
        } else {
            let _ = writeln!(out, "Warnings for planned {} cleaning:", planned.tag());
            for warning in warnings {
                let _ = writeln!(out, "  - {warning}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_request_carries_cli_selections() {
        let args = QuoteArgs {
            square_footage: Some(800.0),
            floors: Some(2),
            service_type: ServiceType::DeepCleaning,
            frequency: ServiceFrequency::Monthly,
            add_ons: vec!["garage_cleaning".to_string()],
            discounts: vec!["first_time".to_string()],
            json: true,
        };

        let request = quote_request(&args);
        let estimate = EstimateCalculator::default().compute(&request);

        // 800 * 0.25 * 2 = 400; + 50; 15% off 450
        assert_eq!(estimate.base_price, 400);
        assert_eq!(estimate.breakdown.discounts, 68);
        assert_eq!(estimate.total_price, 383);

        let report = render_estimate(&estimate);
        assert!(report.contains("- Add-ons: 50"));
        assert!(report.contains("    - Garage Cleaning (50)"));
        assert!(report.contains("- Discounts: -68"));
    }

    #[test]
    fn tier_lookup_separates_custom_quote_from_unpriced_band() {
        let priced = render_tier_lookup(120.0);
        assert!(priced.contains("TIER_4"));
        assert!(priced.contains("- Basic 120 | Standard 180 | Kleaners 240"));

        let undersized = render_tier_lookup(30.0);
        assert!(undersized.contains("TIER_6"));
        assert!(undersized.contains("Outside the priced size bands"));
        assert!(!undersized.contains("Requires a custom quote"));

        assert!(render_tier_lookup(150.0).contains("Requires a custom quote"));
    }

    #[test]
    fn price_table_lists_every_tier() {
        let table = render_price_table();
        assert_eq!(table.lines().count(), 7);
        assert!(table.contains("basic 60 | standard 90 | kleaners 120"));
        assert!(table.contains("TIER_6"));
        assert!(table.lines().last().is_some_and(|line| line.ends_with("custom quote")));
    }

    #[test]
    fn recommendation_report_includes_planned_frequency_warning() {
        let report = render_recommendation(&RecommendArgs {
            visitors: 100,
            visitor_frequency: CleaningFrequency::Daily,
            business_type: BusinessType::Other,
            cleaning_frequency: Some(CleaningFrequency::Monthly),
        });

        assert!(report.starts_with("Recommended cleaning: daily (Medium confidence)"));
        assert!(report.contains("Warnings for planned monthly cleaning:"));
        assert!(report.contains("Consider weekly cleaning."));

        let settled = render_recommendation(&RecommendArgs {
            visitors: 10,
            visitor_frequency: CleaningFrequency::Daily,
            business_type: BusinessType::Medical,
            cleaning_frequency: Some(CleaningFrequency::Daily),
        });
        assert!(settled.contains("Planned daily cleaning fits the visitor load"));
    }
}
