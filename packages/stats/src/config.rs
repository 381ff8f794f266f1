//! Provider configuration, read from the environment.
//!
//! | Variable                          | Default                   |
//! |-----------------------------------|---------------------------|
//! | `CRIME_DASHBOARD_SEED`            | unset (OS-seeded)         |
//! | `CRIME_DASHBOARD_REPORTING_YEAR`  | `2023`                    |
//! | `CRIME_DASHBOARD_CURRENT_YEAR`    | current UTC calendar year |

use std::fmt::Display;
use std::str::FromStr;

use chrono::Datelike as _;
use rand::rngs::StdRng;

use crate::ConfigError;
use crate::random::RngSource;

/// Reporting year stamped on generated crime records.
pub const DEFAULT_REPORTING_YEAR: i32 = 2023;

const SEED_VAR: &str = "CRIME_DASHBOARD_SEED";
const REPORTING_YEAR_VAR: &str = "CRIME_DASHBOARD_REPORTING_YEAR";
const CURRENT_YEAR_VAR: &str = "CRIME_DASHBOARD_CURRENT_YEAR";

/// Settings for a [`crate::StatsProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    /// Year stamped on every [`CrimeRecord`](crime_dashboard_stats_models::CrimeRecord).
    pub reporting_year: i32,
    /// The year yearly trends end on ("now").
    pub current_year: i32,
    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            reporting_year: DEFAULT_REPORTING_YEAR,
            current_year: chrono::Utc::now().year(),
            seed: None,
        }
    }
}

impl StatsConfig {
    /// Builds the configuration from `CRIME_DASHBOARD_*` environment
    /// variables, falling back to defaults for unset ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is present but
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            reporting_year: parse_var(&lookup, REPORTING_YEAR_VAR)?
                .unwrap_or(defaults.reporting_year),
            current_year: parse_var(&lookup, CURRENT_YEAR_VAR)?.unwrap_or(defaults.current_year),
            seed: parse_var(&lookup, SEED_VAR)?,
        };

        log::debug!("Stats config: {config:?}");

        Ok(config)
    }

    /// Returns a copy of this configuration with a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the random source described by this configuration: seeded if
    /// [`StatsConfig::seed`] is set, OS-seeded otherwise.
    #[must_use]
    pub fn random_source(&self) -> RngSource<StdRng> {
        self.seed
            .map_or_else(RngSource::from_entropy, RngSource::seeded)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        log::warn!("{name} is set but empty, using the default");
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.clone(),
            message: e.to_string(),
        })
}
