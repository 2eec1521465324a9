//! Pricing and business-rule engine behind the cleaning-service booking wizard.
//!
//! Every calculation is a pure function over the constant catalogs defined in
//! [`pricing`] and [`business`]; the ambient modules wire configuration,
//! telemetry, and error reporting for the service binary.

pub mod business;
pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
