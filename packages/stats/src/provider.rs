//! Synthetic statistics generators.
//!
//! Every query recomputes fresh random values; nothing is cached. Callers
//! that need a stable view for one rendering pass must keep the returned
//! value rather than query again.

use std::collections::BTreeMap;

use crime_dashboard_city::CityCatalog;
use crime_dashboard_city_models::City;
use crime_dashboard_crime_models::{CrimeCategory, Month};
use crime_dashboard_stats_models::{ComparisonPoint, CrimeRecord, MonthlyCount, YearPoint};

use crate::config::StatsConfig;
use crate::random::RandomSource;

/// Number of points in a yearly trend, ending on the current year.
pub const TREND_YEARS: i32 = 5;

/// Smallest monthly incident count.
const MONTHLY_MIN: u64 = 500;
/// Width of the monthly count range: counts fall in `[500, 1500)`.
const MONTHLY_SPREAD: f64 = 1000.0;

/// Lower bound of the multiplicative noise applied to back-projected rates.
const TREND_NOISE_MIN: f64 = 0.95;
/// Width of the trend noise range: factors fall in `[0.95, 1.05)`.
const TREND_NOISE_SPREAD: f64 = 0.1;

/// Answers dashboard queries against an immutable [`CityCatalog`].
///
/// The provider only reads the catalog, so it can be shared freely; each
/// call takes its own [`RandomSource`].
#[derive(Debug, Clone, Copy)]
pub struct StatsProvider<'a> {
    catalog: &'a CityCatalog,
    config: StatsConfig,
}

impl<'a> StatsProvider<'a> {
    /// Creates a provider over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a CityCatalog, config: StatsConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this provider reads from.
    #[must_use]
    pub const fn catalog(&self) -> &'a CityCatalog {
        self.catalog
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Generates a crime record for the city with identifier `city_id`.
    ///
    /// Returns `None` if no such city exists; an unknown id is an expected
    /// outcome (stale or invalid selection), not an error.
    pub fn get_city_data(&self, city_id: &str, rng: &mut dyn RandomSource) -> Option<CrimeRecord> {
        let Some(city) = self.catalog.get(city_id) else {
            log::debug!("No city with id '{city_id}'");
            return None;
        };

        Some(self.generate_city_data(city, rng))
    }

    /// Generates one crime record per catalog city, in catalog order.
    pub fn get_all_cities_data(&self, rng: &mut dyn RandomSource) -> Vec<CrimeRecord> {
        self.catalog
            .iter()
            .map(|city| self.generate_city_data(city, rng))
            .collect()
    }

    /// Generates a crime record for `city`.
    ///
    /// Each category count is `floor(crime_index * (base + r * jitter))`
    /// using the category's [`weight`](CrimeCategory::weight); each month
    /// count is drawn uniformly from `[500, 1500)`. Categories are drawn
    /// first, in canonical order, followed by the months in calendar order.
    pub fn generate_city_data(&self, city: &City, rng: &mut dyn RandomSource) -> CrimeRecord {
        let categories: BTreeMap<CrimeCategory, u64> = CrimeCategory::all()
            .iter()
            .map(|&category| {
                let weight = category.weight();
                let fraction = rng.next_unit().mul_add(weight.jitter, weight.base);
                (category, floor_count(city.crime_index * fraction))
            })
            .collect();

        let monthly_crimes: Vec<MonthlyCount> = Month::all()
            .iter()
            .map(|&month| MonthlyCount {
                month,
                count: floor_count(rng.next_unit() * MONTHLY_SPREAD) + MONTHLY_MIN,
            })
            .collect();

        log::trace!("Generated crime record for {}", city.id);

        CrimeRecord {
            city: city.name.clone(),
            year: self.config.reporting_year,
            crime_rate: city.crime_index,
            categories,
            monthly_crimes,
        }
    }

    /// Generates the five-year crime rate trend for `city`, oldest first.
    ///
    /// The current year's rate is the city's crime index exactly. Each
    /// earlier year compounds the inverse of the year-over-year change
    /// backwards, applies a random factor in `[0.95, 1.05)`, and rounds to
    /// one decimal place.
    pub fn generate_yearly_trend(&self, city: &City, rng: &mut dyn RandomSource) -> Vec<YearPoint> {
        let current_year = self.config.current_year;
        let compound_factor = 1.0 - city.change_from_last_year / 100.0;

        (0..TREND_YEARS)
            .rev()
            .map(|years_before| {
                let year = current_year - years_before;
                if years_before == 0 {
                    return YearPoint {
                        year,
                        rate: city.crime_index,
                    };
                }

                let noise = rng
                    .next_unit()
                    .mul_add(TREND_NOISE_SPREAD, TREND_NOISE_MIN);
                let rate = city.crime_index * compound_factor.powi(years_before) * noise;

                YearPoint {
                    year,
                    rate: round_one_decimal(rate),
                }
            })
            .collect()
    }

    /// Generates the yearly trend for the city with identifier `city_id`,
    /// returned alongside the resolved city, or `None` if no such city
    /// exists.
    pub fn generate_yearly_trend_by_id(
        &self,
        city_id: &str,
        rng: &mut dyn RandomSource,
    ) -> Option<(&'a City, Vec<YearPoint>)> {
        let city = self.catalog.get(city_id)?;
        Some((city, self.generate_yearly_trend(city, rng)))
    }

    /// Compares one category across every catalog city.
    ///
    /// Each city gets a freshly generated record; the result has exactly one
    /// entry per city, sorted by value descending. Ties keep catalog order.
    pub fn generate_category_comparison(
        &self,
        category: CrimeCategory,
        rng: &mut dyn RandomSource,
    ) -> Vec<ComparisonPoint> {
        let mut points: Vec<ComparisonPoint> = self
            .catalog
            .iter()
            .map(|city| {
                let record = self.generate_city_data(city, rng);
                ComparisonPoint {
                    city: city.name.clone(),
                    value: record.category_count(category),
                }
            })
            .collect();

        points.sort_by(|a, b| b.value.cmp(&a.value));

        points
    }

    /// Returns the cities whose name or state contains `query`
    /// (case-insensitive), in catalog order.
    ///
    /// An empty query matches every city.
    #[must_use]
    pub fn search_cities(&self, query: &str) -> Vec<&'a City> {
        self.catalog.search(query)
    }
}

/// Floors a non-negative generated value to an integer count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_count(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    /// Returns the same value on every draw.
    struct ConstantSource(f64);

    impl RandomSource for ConstantSource {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    /// Counts draws while delegating to an inner source.
    struct CountingSource<S> {
        inner: S,
        draws: usize,
    }

    impl<S: RandomSource> RandomSource for CountingSource<S> {
        fn next_unit(&mut self) -> f64 {
            self.draws += 1;
            self.inner.next_unit()
        }
    }

    fn catalog() -> CityCatalog {
        CityCatalog::builtin().unwrap()
    }

    fn config() -> StatsConfig {
        StatsConfig {
            reporting_year: 2023,
            current_year: 2026,
            seed: None,
        }
    }

    fn counts(record: &CrimeRecord) -> Vec<u64> {
        CrimeCategory::all()
            .iter()
            .map(|&c| record.category_count(c))
            .collect()
    }

    #[test]
    fn city_data_shape_holds_for_every_city() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = RngSource::from_entropy();

        for _ in 0..50 {
            for city in &catalog {
                let record = provider.get_city_data(&city.id, &mut rng).unwrap();

                assert_eq!(record.city, city.name);
                assert_eq!(record.year, 2023);
                assert!((record.crime_rate - city.crime_index).abs() < f64::EPSILON);

                assert_eq!(record.categories.len(), CrimeCategory::all().len());
                for &category in CrimeCategory::all() {
                    let weight = category.weight();
                    let count = record.category_count(category);
                    let low = (city.crime_index * weight.min_fraction()).floor();
                    let high = (city.crime_index * weight.max_fraction()).floor();
                    #[allow(clippy::cast_precision_loss)]
                    let count_f = count as f64;
                    assert!(
                        (low..=high).contains(&count_f),
                        "{} {category} = {count}, expected [{low}, {high}]",
                        city.id
                    );
                }

                let months: Vec<Month> = record.monthly_crimes.iter().map(|m| m.month).collect();
                assert_eq!(months, Month::all());
                for monthly in &record.monthly_crimes {
                    assert!(
                        (500..1500).contains(&monthly.count),
                        "{} {} = {}",
                        city.id,
                        monthly.month,
                        monthly.count
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_city_is_none() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = CountingSource {
            inner: ConstantSource(0.5),
            draws: 0,
        };

        assert!(provider.get_city_data("atlantis", &mut rng).is_none());
        assert!(provider.generate_yearly_trend_by_id("atlantis", &mut rng).is_none());
        assert_eq!(rng.draws, 0, "lookups of unknown ids must not draw");
    }

    #[test]
    fn city_data_is_exact_for_fixed_draws() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let low = provider
            .get_city_data("delhi", &mut ConstantSource(0.0))
            .unwrap();
        assert_eq!(counts(&low), [28, 43, 21, 28, 21]);
        assert!(low.monthly_crimes.iter().all(|m| m.count == 500));

        let mid = provider
            .get_city_data("delhi", &mut ConstantSource(0.5))
            .unwrap();
        assert_eq!(counts(&mid), [35, 53, 28, 35, 25]);
        assert!(mid.monthly_crimes.iter().all(|m| m.count == 1000));
        assert_eq!(mid.total_incidents(), 12_000);
    }

    #[test]
    fn city_data_draws_categories_then_months() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = CountingSource {
            inner: ConstantSource(0.0),
            draws: 0,
        };

        provider.get_city_data("pune", &mut rng).unwrap();
        assert_eq!(rng.draws, 5 + 12);
    }

    #[test]
    fn repeated_calls_differ_but_keep_rate() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = RngSource::seeded(99);

        let first = provider.get_city_data("mumbai", &mut rng).unwrap();
        let second = provider.get_city_data("mumbai", &mut rng).unwrap();

        assert!((first.crime_rate - second.crime_rate).abs() < f64::EPSILON);
        assert_ne!(first.monthly_crimes, second.monthly_crimes);
    }

    #[test]
    fn seeded_sources_reproduce_output() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let a = provider.get_all_cities_data(&mut RngSource::seeded(5));
        let b = provider.get_all_cities_data(&mut RngSource::seeded(5));
        assert_eq!(a, b);
    }

    #[test]
    fn all_cities_data_follows_catalog_order() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let records = provider.get_all_cities_data(&mut RngSource::from_entropy());
        let names: Vec<&str> = records.iter().map(|r| r.city.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn yearly_trend_shape() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = RngSource::from_entropy();

        for city in &catalog {
            for _ in 0..20 {
                let trend = provider.generate_yearly_trend(city, &mut rng);
                assert_eq!(trend.len(), 5);

                let years: Vec<i32> = trend.iter().map(|p| p.year).collect();
                assert_eq!(years, [2022, 2023, 2024, 2025, 2026]);

                let last = trend.last().unwrap();
                assert_eq!(last.rate.to_bits(), city.crime_index.to_bits());

                for point in &trend {
                    assert!(point.rate > 0.0);
                    let tenths = point.rate * 10.0;
                    assert!(
                        (tenths - tenths.round()).abs() < 1e-6,
                        "{} not rounded to one decimal",
                        point.rate
                    );
                }
            }
        }
    }

    #[test]
    fn delhi_trend_ends_on_crime_index() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let (city, trend) = provider
            .generate_yearly_trend_by_id("delhi", &mut RngSource::from_entropy())
            .unwrap();
        assert_eq!(city.name, "Delhi");
        assert_eq!(
            trend.last().copied(),
            Some(YearPoint {
                year: 2026,
                rate: 143.8
            })
        );
    }

    #[test]
    fn yearly_trend_is_exact_for_fixed_draws() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let delhi = catalog.get("delhi").unwrap();
        let mut rng = CountingSource {
            inner: ConstantSource(0.5),
            draws: 0,
        };

        let rates: Vec<f64> = provider
            .generate_yearly_trend(delhi, &mut rng)
            .iter()
            .map(|p| p.rate)
            .collect();
        assert_eq!(rates, [169.5, 162.7, 156.1, 149.8, 143.8]);
        assert_eq!(rng.draws, 4, "the current year must not draw");

        let pune = catalog.get("pune").unwrap();
        let rates: Vec<f64> = provider
            .generate_yearly_trend(pune, &mut ConstantSource(0.0))
            .iter()
            .map(|p| p.rate)
            .collect();
        assert_eq!(rates, [87.0, 86.5, 86.0, 85.4, 89.4]);
    }

    #[test]
    fn category_comparison_shape() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = RngSource::from_entropy();

        for &category in CrimeCategory::all() {
            let comparison = provider.generate_category_comparison(category, &mut rng);
            assert_eq!(comparison.len(), catalog.len());
            assert!(
                comparison.windows(2).all(|w| w[0].value >= w[1].value),
                "{category} comparison not sorted descending: {comparison:?}"
            );

            let mut names: Vec<&str> = comparison.iter().map(|p| p.city.as_str()).collect();
            names.sort_unstable();
            let mut expected: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn category_comparison_ties_keep_catalog_order() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let comparison =
            provider.generate_category_comparison(CrimeCategory::Violence, &mut ConstantSource(0.5));
        let ranked: Vec<(&str, u64)> = comparison
            .iter()
            .map(|p| (p.city.as_str(), p.value))
            .collect();
        assert_eq!(
            ranked,
            [
                ("Delhi", 35),
                ("Mumbai", 32),
                ("Bengaluru", 29),
                ("Hyderabad", 28),
                ("Lucknow", 25),
                ("Chennai", 24),
                ("Jaipur", 24),
                ("Ahmedabad", 22),
                ("Pune", 22),
                ("Kolkata", 21),
            ]
        );
    }

    #[test]
    fn category_comparison_regenerates_every_city() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());
        let mut rng = CountingSource {
            inner: ConstantSource(0.25),
            draws: 0,
        };

        provider.generate_category_comparison(CrimeCategory::Theft, &mut rng);
        assert_eq!(rng.draws, catalog.len() * (5 + 12));
    }

    #[test]
    fn search_cities_by_name_and_state() {
        let catalog = catalog();
        let provider = StatsProvider::new(&catalog, config());

        let mumbai: Vec<&str> = provider
            .search_cities("mumbai")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(mumbai, ["mumbai"]);

        let maharashtra: Vec<&str> = provider
            .search_cities("maharashtra")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(maharashtra, ["mumbai", "pune"]);

        assert_eq!(provider.search_cities("").len(), catalog.len());
    }
}
