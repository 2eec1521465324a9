use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use kleaners_pricing::business::{
    apply_business_defaults, business_type_defaults, cleaning_count_limits, recommended_frequency,
    validate_business_details, visitor_count_limits, BusinessDetails, BusinessType,
    BusinessTypeDefaults, CleaningFrequency, FrequencyRecommendation, RangeLimits,
    ValidationResult, VisitorFrequency,
};
use kleaners_pricing::error::AppError;
use kleaners_pricing::pricing::{
    price_for_all_efforts, price_table, property_constraints, requires_custom_quote, size_tier,
    validate_property_details, EffortPrices, Estimate, EstimateCalculator, EstimateRequest,
    PriceTableRow, PropertyConstraints, PropertyDetails, PropertySizeTier, PropertyValidation,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TierLookupResponse {
    pub(crate) square_footage: f64,
    pub(crate) tier: PropertySizeTier,
    pub(crate) label: &'static str,
    pub(crate) requires_custom_quote: bool,
    /// True for the unpriced tier, which also covers sizes below 50.
    pub(crate) custom_quote_tier: bool,
    pub(crate) prices: EffortPrices,
    pub(crate) constraints: PropertyConstraints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FrequencyLimitsResponse {
    pub(crate) frequency: CleaningFrequency,
    pub(crate) visitor_count: RangeLimits,
    pub(crate) cleaning_count: RangeLimits,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationRequest {
    pub(crate) visitor_count: u32,
    pub(crate) visitor_frequency: VisitorFrequency,
    pub(crate) business_type: BusinessType,
}

/// Pricing and booking-rule endpoints backed by a shared calculator.
pub fn pricing_router(calculator: Arc<EstimateCalculator>) -> Router {
    Router::new()
        .route("/api/v1/pricing/tiers", get(price_table_endpoint))
        .route(
            "/api/v1/pricing/tiers/{square_footage}",
            get(tier_lookup_endpoint),
        )
        .route(
            "/api/v1/property/validate",
            post(property_validation_endpoint),
        )
        .route("/api/v1/estimates", post(estimate_endpoint))
        .route(
            "/api/v1/business/defaults/{business_type}",
            get(business_defaults_endpoint).post(apply_business_defaults_endpoint),
        )
        .route(
            "/api/v1/business/limits/{frequency}",
            get(frequency_limits_endpoint),
        )
        .route(
            "/api/v1/business/validate",
            post(business_validation_endpoint),
        )
        .route(
            "/api/v1/business/recommendation",
            post(recommendation_endpoint),
        )
        .with_state(calculator)
}

pub(crate) fn with_operational_routes(calculator: Arc<EstimateCalculator>) -> Router {
    pricing_router(calculator)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn price_table_endpoint() -> Json<Vec<PriceTableRow>> {
    Json(price_table())
}

pub(crate) async fn tier_lookup_endpoint(
    Path(square_footage): Path<f64>,
) -> Json<TierLookupResponse> {
    let tier = size_tier(square_footage);

    Json(TierLookupResponse {
        square_footage,
        tier,
        label: tier.label(),
        requires_custom_quote: requires_custom_quote(square_footage),
        custom_quote_tier: tier.is_custom_quote(),
        prices: price_for_all_efforts(tier),
        constraints: property_constraints(square_footage),
    })
}

pub(crate) async fn property_validation_endpoint(
    Json(property): Json<PropertyDetails>,
) -> Json<PropertyValidation> {
    Json(validate_property_details(&property))
}

pub(crate) async fn estimate_endpoint(
    State(calculator): State<Arc<EstimateCalculator>>,
    Json(request): Json<EstimateRequest>,
) -> Json<Estimate> {
    let estimate = calculator.compute(&request);
    info!(
        service_type = ?estimate.service_type,
        total = estimate.breakdown.total,
        "estimate issued"
    );
    Json(estimate)
}

pub(crate) async fn business_defaults_endpoint(
    Path(business_type): Path<String>,
) -> Result<Json<BusinessTypeDefaults>, AppError> {
    let business_type = business_type.parse::<BusinessType>()?;
    Ok(Json(business_type_defaults(business_type)))
}

pub(crate) async fn apply_business_defaults_endpoint(
    Path(business_type): Path<String>,
    Json(current): Json<BusinessDetails>,
) -> Result<Json<BusinessDetails>, AppError> {
    let business_type = business_type.parse::<BusinessType>()?;
    Ok(Json(apply_business_defaults(business_type, &current)))
}

pub(crate) async fn frequency_limits_endpoint(
    Path(frequency): Path<String>,
) -> Result<Json<FrequencyLimitsResponse>, AppError> {
    let frequency = frequency.parse::<CleaningFrequency>()?;
    Ok(Json(FrequencyLimitsResponse {
        frequency,
        visitor_count: visitor_count_limits(frequency),
        cleaning_count: cleaning_count_limits(frequency),
    }))
}

pub(crate) async fn business_validation_endpoint(
    Json(details): Json<BusinessDetails>,
) -> Json<ValidationResult> {
    Json(validate_business_details(&details))
}

pub(crate) async fn recommendation_endpoint(
    Json(request): Json<RecommendationRequest>,
) -> Json<FrequencyRecommendation> {
    Json(recommended_frequency(
        request.visitor_count,
        request.visitor_frequency,
        request.business_type,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn test_router(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_operational_routes(Arc::new(EstimateCalculator::default())).layer(Extension(state))
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    fn json_post(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = test_router(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = test_router(true)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn tier_lookup_reports_prices_and_room_limits() {
        let response = test_router(true)
            .oneshot(
                Request::get("/api/v1/pricing/tiers/95")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["tier"], "TIER_3");
        assert_eq!(payload["requiresCustomQuote"], false);
        assert_eq!(payload["customQuoteTier"], false);
        assert_eq!(payload["prices"]["standard"], 150);
        assert_eq!(payload["constraints"]["maxBedrooms"], 3);
    }

    #[tokio::test]
    async fn undersized_property_lands_in_unpriced_tier_without_custom_quote_flag() {
        let response = test_router(true)
            .oneshot(
                Request::get("/api/v1/pricing/tiers/30")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["tier"], "TIER_6");
        assert_eq!(payload["requiresCustomQuote"], false);
        assert_eq!(payload["customQuoteTier"], true);
        assert_eq!(payload["prices"]["basic"], 0);

        let Json(body) = tier_lookup_endpoint(Path(150.0)).await;
        assert!(body.requires_custom_quote);
        assert!(body.custom_quote_tier);
    }

    #[tokio::test]
    async fn estimate_route_prices_weekly_home_cleaning() {
        let response = test_router(true)
            .oneshot(json_post(
                "/api/v1/estimates",
                json!({
                    "property": { "squareFootage": 1000 },
                    "serviceType": "HOME_CLEANING",
                    "frequency": "WEEKLY"
                }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["basePrice"], 150);
        assert_eq!(payload["totalPrice"], 120);
        assert_eq!(payload["breakdown"]["taxes"], 10);
        assert_eq!(payload["breakdown"]["total"], 130);
        assert_eq!(payload["currency"], "USD");
    }

    #[tokio::test]
    async fn unknown_business_type_is_bad_request() {
        let response = test_router(true)
            .oneshot(
                Request::get("/api/v1/business/defaults/spa")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("spa")));
    }

    #[tokio::test]
    async fn applying_defaults_keeps_customer_choices() {
        let response = test_router(true)
            .oneshot(json_post(
                "/api/v1/business/defaults/medical",
                json!({ "cleaningCount": 3, "squareFootage": 400 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["businessType"], "medical");
        assert_eq!(payload["cleaningFrequency"], "daily");
        assert_eq!(payload["cleaningCount"], 3);
        assert_eq!(payload["floorType"], "vinyl");
    }

    #[tokio::test]
    async fn limits_route_returns_both_ranges() {
        let Json(body) = frequency_limits_endpoint(Path("weekly".to_string()))
            .await
            .expect("weekly is known");

        assert_eq!(body.visitor_count.max, 500);
        assert_eq!(body.visitor_count.step, 10);
        assert_eq!(body.cleaning_count.max, 14);
    }

    #[tokio::test]
    async fn business_validation_lists_missing_fields() {
        let Json(result) = business_validation_endpoint(Json(BusinessDetails::default())).await;
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Business type is required".to_string()));
    }

    #[tokio::test]
    async fn recommendation_route_accepts_camel_case_payload() {
        let response = test_router(true)
            .oneshot(json_post(
                "/api/v1/business/recommendation",
                json!({
                    "visitorCount": 350,
                    "visitorFrequency": "weekly",
                    "businessType": "office"
                }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["recommended"], "daily");
        assert_eq!(payload["confidence"], "medium");
    }
}
