#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic crime statistics for the dashboard.
//!
//! [`provider::StatsProvider`] borrows an immutable
//! [`CityCatalog`](crime_dashboard_city::CityCatalog) and answers every
//! dashboard query: per-city records, five-year trends, cross-city category
//! comparisons, and city search. Randomness is injected per call through
//! [`random::RandomSource`], so callers choose between an OS-seeded source
//! and a reproducible seeded one.

pub mod config;
pub mod provider;
pub mod random;

use thiserror::Error;

pub use config::StatsConfig;
pub use provider::StatsProvider;
pub use random::{RandomSource, RngSource};

/// Errors that can occur while building the statistics configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that could not be parsed.
    #[error("Invalid value '{value}' for {name}: {message}")]
    InvalidValue {
        /// Name of the offending variable.
        name: String,
        /// The raw value that was provided.
        value: String,
        /// Description of what went wrong.
        message: String,
    },
}
