use chrono::{Duration, TimeZone, Utc};
use kleaners_pricing::pricing::{
    add_on_catalog, calculate_price, discount_catalog, price_for_all_efforts,
    property_constraints, requires_custom_quote, size_tier, validate_property_details,
    EffortLevel, EstimateCalculator, EstimateProperty, EstimateRequest, EstimateSettings,
    PropertyDetails, PropertySizeTier, RoundingPolicy, ServiceFrequency, ServiceType,
};

fn apartment(square_footage: f64, bedrooms: u32, bathrooms: u32) -> PropertyDetails {
    PropertyDetails {
        bedrooms,
        bathrooms,
        square_footage,
        floors: None,
        access_instructions: Some("Key with concierge".to_string()),
        size_tier: None,
    }
}

#[test]
fn tier_classification_is_total_and_partitioned() {
    let mut tenths = 0u32;
    while tenths <= 3000 {
        let square_footage = f64::from(tenths) / 10.0;
        let tier = size_tier(square_footage);

        let matching: Vec<PropertySizeTier> = PropertySizeTier::ordered()
            .into_iter()
            .filter(|candidate| match candidate.range() {
                Some((start, end)) => {
                    square_footage >= f64::from(start) && square_footage < f64::from(end)
                }
                None => !(50.0..150.0).contains(&square_footage),
            })
            .collect();

        assert_eq!(matching, vec![tier], "tier overlap at {square_footage}");
        assert_eq!(
            requires_custom_quote(square_footage),
            square_footage >= 150.0,
            "custom quote flag at {square_footage}"
        );
        tenths += 5;
    }
}

#[test]
fn prices_rise_with_effort_and_tier() {
    for tier in PropertySizeTier::ordered() {
        let prices = price_for_all_efforts(tier);
        assert!(prices.basic <= prices.standard && prices.standard <= prices.kleaners);
    }

    for effort in EffortLevel::ordered() {
        let priced: Vec<u32> = PropertySizeTier::ordered()[..5]
            .iter()
            .map(|tier| calculate_price(*tier, effort))
            .collect();
        assert!(priced.windows(2).all(|pair| pair[0] <= pair[1]), "{effort:?}");
        assert_eq!(calculate_price(PropertySizeTier::Tier6, effort), 0);
    }
}

#[test]
fn wizard_flow_from_size_to_estimate() {
    let details = apartment(95.0, 3, 2).classified();
    assert_eq!(details.size_tier, Some(PropertySizeTier::Tier3));

    let validation = validate_property_details(&details);
    assert!(validation.is_valid);
    assert_eq!(validation.constraints, property_constraints(95.0));

    assert_eq!(calculate_price(PropertySizeTier::Tier3, EffortLevel::Standard), 150);

    let now = Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0).unwrap();
    let request = EstimateRequest {
        property: EstimateProperty::from(&details),
        service_type: ServiceType::HomeCleaning,
        frequency: ServiceFrequency::BiWeekly,
        add_ons: vec!["oven_cleaning".to_string(), "window_cleaning".to_string()],
        discounts: vec!["referral".to_string()],
    };
    let estimate = EstimateCalculator::default().compute_at(&request, now);

    // 95 * 0.15 = 14.25 -> minimum 80; (80 + 70) * 0.9 = 135; minus 20
    assert_eq!(estimate.base_price, 80);
    assert_eq!(estimate.breakdown.add_ons, 70);
    assert_eq!(estimate.total_price, 115);
    assert_eq!(estimate.breakdown.taxes, 9);
    assert_eq!(estimate.breakdown.total, 124);
    assert_eq!(estimate.duration, 180);
    assert_eq!(estimate.valid_until - now, Duration::days(7));
}

#[test]
fn oversized_bedroom_count_fails_validation() {
    let validation = validate_property_details(&apartment(100.0, 4, 2));

    assert!(!validation.is_valid);
    assert_eq!(validation.constraints.max_bedrooms, 3);
    assert_eq!(validation.constraints.max_bathrooms, 2);
    assert!(validation
        .errors
        .iter()
        .any(|error| error.starts_with("Maximum 3 bedrooms allowed")));
}

#[test]
fn every_catalog_combination_stays_non_negative_and_floored() {
    let add_on_ids: Vec<String> = add_on_catalog().into_iter().map(|a| a.id).collect();
    let discount_ids: Vec<String> = discount_catalog().into_iter().map(|d| d.id).collect();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let calculator = EstimateCalculator::new(EstimateSettings {
        rounding: RoundingPolicy::Consistent,
        ..EstimateSettings::default()
    });

    for add_on_mask in 0u32..(1 << add_on_ids.len()) {
        for discount_mask in 0u32..(1 << discount_ids.len()) {
            let request = EstimateRequest {
                property: EstimateProperty {
                    square_footage: Some(120.0),
                    floors: None,
                },
                service_type: ServiceType::OfficeCleaning,
                frequency: ServiceFrequency::Weekly,
                add_ons: pick(&add_on_ids, add_on_mask),
                discounts: pick(&discount_ids, discount_mask),
            };

            let estimate = calculator.compute_at(&request, now);
            assert!(estimate.base_price >= 80);
            assert_eq!(
                estimate.breakdown.total,
                estimate.total_price + estimate.breakdown.taxes
            );
            assert_eq!(estimate.add_ons.len(), request.add_ons.len());
            assert_eq!(
                estimate.duration,
                120 + 30 * request.add_ons.len() as u32
            );
        }
    }
}

fn pick(ids: &[String], mask: u32) -> Vec<String> {
    ids.iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << index) != 0)
        .map(|(_, id)| id.clone())
        .collect()
}

#[test]
fn estimate_serializes_with_ui_field_names() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let request: EstimateRequest = serde_json::from_str(
        r#"{
            "property": { "squareFootage": 1000 },
            "serviceType": "HOME_CLEANING",
            "frequency": "WEEKLY"
        }"#,
    )
    .expect("request parses");

    let estimate = EstimateCalculator::default().compute_at(&request, now);
    let value = serde_json::to_value(&estimate).expect("estimate serializes");

    assert_eq!(value["basePrice"], 150);
    assert_eq!(value["totalPrice"], 120);
    assert_eq!(value["breakdown"]["frequencyMultiplier"], 0.8);
    assert_eq!(value["breakdown"]["taxes"], 10);
    assert_eq!(value["breakdown"]["total"], 130);
    assert_eq!(value["frequency"], "WEEKLY");
    assert!(value["validUntil"].as_str().unwrap().starts_with("2025-01-08"));
}
