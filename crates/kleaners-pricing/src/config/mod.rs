use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::pricing::estimate::{DEFAULT_TAX_RATE, DEFAULT_VALIDITY_DAYS};
use crate::pricing::{EstimateSettings, RoundingPolicy};

/// Longest quote validity the service will issue.
pub const MAX_VALIDITY_DAYS: u32 = 365;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the pricing service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub estimate: EstimateSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            estimate: load_estimate_settings()?,
        })
    }
}

fn load_estimate_settings() -> Result<EstimateSettings, ConfigError> {
    let tax_rate = match env::var("APP_TAX_RATE") {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite() && (0.0..1.0).contains(rate))
            .ok_or(ConfigError::InvalidTaxRate { value: raw })?,
        Err(_) => DEFAULT_TAX_RATE,
    };

    let validity_days = match env::var("APP_QUOTE_VALIDITY_DAYS") {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|days| (1..=MAX_VALIDITY_DAYS).contains(days))
            .ok_or(ConfigError::InvalidValidityDays { value: raw })?,
        Err(_) => DEFAULT_VALIDITY_DAYS,
    };

    let rounding = match env::var("APP_ESTIMATE_ROUNDING") {
        Ok(raw) => raw
            .parse::<RoundingPolicy>()
            .map_err(|_| ConfigError::InvalidRounding { value: raw })?,
        Err(_) => RoundingPolicy::default(),
    };

    Ok(EstimateSettings {
        tax_rate,
        validity_days,
        rounding,
    })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTaxRate { value: String },
    InvalidValidityDays { value: String },
    InvalidRounding { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTaxRate { value } => {
                write!(f, "APP_TAX_RATE must be a rate in [0, 1), got '{value}'")
            }
            ConfigError::InvalidValidityDays { value } => write!(
                f,
                "APP_QUOTE_VALIDITY_DAYS must be between 1 and {MAX_VALIDITY_DAYS} days, got '{value}'"
            ),
            ConfigError::InvalidRounding { value } => write!(
                f,
                "APP_ESTIMATE_ROUNDING must be 'compatible' or 'consistent', got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTaxRate { .. }
            | ConfigError::InvalidValidityDays { .. }
            | ConfigError::InvalidRounding { .. } => None,
        }
    }
}
