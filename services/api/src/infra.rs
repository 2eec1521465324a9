use kleaners_pricing::business::{BusinessType, CleaningFrequency};
use kleaners_pricing::pricing::{ServiceFrequency, ServiceType};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_service_type(raw: &str) -> Result<ServiceType, String> {
    raw.parse().map_err(|err| format!("{err} (expected home, office, or deep)"))
}

pub(crate) fn parse_service_frequency(raw: &str) -> Result<ServiceFrequency, String> {
    raw.parse()
        .map_err(|err| format!("{err} (expected one-time, weekly, bi-weekly, or monthly)"))
}

pub(crate) fn parse_business_type(raw: &str) -> Result<BusinessType, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_cleaning_frequency(raw: &str) -> Result<CleaningFrequency, String> {
    raw.parse()
        .map_err(|err| format!("{err} (expected daily, weekly, or monthly)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_explain_rejections() {
        assert_eq!(parse_service_type("deep"), Ok(ServiceType::DeepCleaning));
        let err = parse_service_frequency("hourly").unwrap_err();
        assert!(err.contains("unknown service frequency 'hourly'"));
        assert!(parse_business_type("spa").is_err());
        assert_eq!(
            parse_cleaning_frequency("Weekly"),
            Ok(CleaningFrequency::Weekly)
        );
    }
}
