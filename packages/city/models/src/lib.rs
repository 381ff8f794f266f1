#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City record types shared between the catalog and the statistics
//! generators.

use serde::{Deserialize, Serialize};

/// A city in the dashboard catalog.
///
/// Cities are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Stable lookup key (e.g. `"delhi"`).
    pub id: String,
    /// Display name (e.g. `"Delhi"`).
    pub name: String,
    /// State or region label (e.g. `"Delhi NCR"`).
    pub state: String,
    /// Resident population.
    pub population: u64,
    /// Overall crime index, reported per 100,000 people.
    pub crime_index: f64,
    /// Year-over-year change of the crime index, in percent.
    pub change_from_last_year: f64,
}

impl City {
    /// Returns `true` if `query` is a case-insensitive substring of the
    /// city's display name or state.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.state.to_lowercase().contains(&query)
    }

    /// Crime index formatted with one decimal place (e.g. `"143.8"`).
    #[must_use]
    pub fn formatted_crime_rate(&self) -> String {
        format!("{:.1}", self.crime_index)
    }

    /// Year-over-year change formatted as a signed percentage
    /// (e.g. `"-4.2%"`).
    #[must_use]
    pub fn formatted_change(&self) -> String {
        format!("{:+.1}%", self.change_from_last_year)
    }
}
