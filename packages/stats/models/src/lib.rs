#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types produced by the synthetic statistics provider.
//!
//! Every value here is ephemeral: it is generated fresh on each request and
//! has no identity beyond the request that produced it. Counts are unsigned,
//! so non-negativity holds by construction.

use std::collections::BTreeMap;

use crime_dashboard_crime_models::{CrimeCategory, Month};
use serde::{Deserialize, Serialize};

/// Incident count for a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Month label.
    pub month: Month,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for a single crime category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Crime category.
    pub category: CrimeCategory,
    /// Number of incidents.
    pub count: u64,
}

/// One synthetic snapshot of crime statistics for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    /// City display name.
    pub city: String,
    /// Reporting year of the snapshot.
    pub year: i32,
    /// Overall crime rate per 100,000 people (the city's crime index).
    pub crime_rate: f64,
    /// Incident counts keyed by category.
    pub categories: BTreeMap<CrimeCategory, u64>,
    /// Incident counts for each month, in calendar order.
    pub monthly_crimes: Vec<MonthlyCount>,
}

impl CrimeRecord {
    /// Returns the incident count for `category`, or 0 if the record has no
    /// entry for it.
    #[must_use]
    pub fn category_count(&self, category: CrimeCategory) -> u64 {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Returns the category counts as a list in canonical category order,
    /// suitable for pie-chart style breakdowns.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryCount> {
        CrimeCategory::all()
            .iter()
            .filter_map(|&category| {
                self.categories
                    .get(&category)
                    .map(|&count| CategoryCount { category, count })
            })
            .collect()
    }

    /// Sum of all monthly incident counts.
    #[must_use]
    pub fn total_incidents(&self) -> u64 {
        self.monthly_crimes.iter().map(|m| m.count).sum()
    }
}

/// Crime rate for one year of a city's trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPoint {
    /// Calendar year.
    pub year: i32,
    /// Crime rate, rounded to one decimal place.
    pub rate: f64,
}

/// One city's value in a cross-city category comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
    /// City display name.
    pub city: String,
    /// Incident count for the compared category.
    pub value: u64,
}
