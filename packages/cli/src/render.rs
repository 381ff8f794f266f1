//! Plain-text table rendering for command output.

use crime_dashboard_city_models::City;
use crime_dashboard_crime_models::CrimeCategory;
use crime_dashboard_stats_models::{ComparisonPoint, CrimeRecord, YearPoint};

/// Renders a city listing.
#[must_use]
pub fn cities_table(cities: &[&City]) -> String {
    if cities.is_empty() {
        return "No cities found.\n".to_string();
    }

    let mut out = format!(
        "{:<12} {:<12} {:<16} {:>12} {:>8} {:>8}\n",
        "ID", "NAME", "STATE", "POPULATION", "INDEX", "YOY"
    );
    out.push_str(&rule(73));
    for city in cities {
        out.push_str(&format!(
            "{:<12} {:<12} {:<16} {:>12} {:>8} {:>8}\n",
            city.id,
            city.name,
            city.state,
            city.population,
            city.formatted_crime_rate(),
            city.formatted_change()
        ));
    }
    out.push_str(&format!("\n{} city(s)\n", cities.len()));
    out
}

/// Renders the featured-city cards: crime rate and year-over-year change.
#[must_use]
pub fn featured_table(cities: &[City]) -> String {
    cities
        .iter()
        .map(|city| {
            format!(
                "{}\n  Total Crime Rate: {}\n  YoY Change:       {}\n",
                city.name,
                city.formatted_crime_rate(),
                city.formatted_change()
            )
        })
        .collect()
}

/// Renders a city's crime record: overview, category breakdown, and
/// monthly counts.
#[must_use]
pub fn record_table(record: &CrimeRecord) -> String {
    let mut out = format!(
        "{} Crime Overview ({})\nOverall crime rate: {:.1} per 100,000 people\n",
        record.city, record.year, record.crime_rate
    );

    out.push_str(&format!("\n{:<12} {:>8}\n", "CATEGORY", "COUNT"));
    out.push_str(&rule(21));
    for entry in record.category_breakdown() {
        out.push_str(&format!("{:<12} {:>8}\n", entry.category, entry.count));
    }

    out.push_str(&format!("\n{:<12} {:>8}\n", "MONTH", "COUNT"));
    out.push_str(&rule(21));
    for monthly in &record.monthly_crimes {
        out.push_str(&format!("{:<12} {:>8}\n", monthly.month, monthly.count));
    }
    out.push_str(&format!(
        "{:<12} {:>8}\n",
        "Total",
        record.total_incidents()
    ));
    out
}

/// Renders a five-year crime rate trend.
#[must_use]
pub fn trend_table(city_name: &str, trend: &[YearPoint]) -> String {
    let mut out = format!("{city_name} crime rate trend\n{:<6} {:>8}\n", "YEAR", "RATE");
    out.push_str(&rule(15));
    for point in trend {
        out.push_str(&format!("{:<6} {:>8.1}\n", point.year, point.rate));
    }
    out
}

/// Renders a cross-city comparison for one category, highest first.
#[must_use]
pub fn comparison_table(category: CrimeCategory, points: &[ComparisonPoint]) -> String {
    let mut out = format!(
        "{category} across cities\n{:<4} {:<12} {:>8}\n",
        "#", "CITY", "COUNT"
    );
    out.push_str(&rule(26));
    for (rank, point) in points.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<12} {:>8}\n",
            rank + 1,
            point.city,
            point.value
        ));
    }
    out
}

/// A dashed separator line of `width` characters.
fn rule(width: usize) -> String {
    format!("{}\n", "-".repeat(width))
}
