#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Immutable city catalog.
//!
//! The built-in catalog lives in `cities.toml`, which is baked into the
//! binary at compile time via [`include_str!`]. Adding a city is as simple
//! as appending a `[[cities]]` table to that file. The catalog is validated
//! once when it is loaded and is read-only afterwards, so a single
//! [`CityCatalog`] can be shared by reference across any number of callers.

use std::collections::BTreeSet;

use crime_dashboard_city_models::City;
use serde::Deserialize;
use thiserror::Error;

/// TOML catalog embedded at compile time.
const BUILTIN_CITIES_TOML: &str = include_str!("../cities.toml");

/// Errors that can occur while loading a city catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid TOML or has the wrong shape.
    #[error("Failed to parse city catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog contains no cities.
    #[error("City catalog is empty")]
    Empty,

    /// Two cities share the same identifier.
    #[error("Duplicate city id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A city has a field outside its valid range.
    #[error("Invalid city '{id}': {message}")]
    InvalidCity {
        /// Identifier of the offending city.
        id: String,
        /// Description of what went wrong.
        message: String,
    },
}

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    cities: Vec<CityEntry>,
}

/// One `[[cities]]` table in the catalog document.
#[derive(Debug, Deserialize)]
struct CityEntry {
    id: String,
    name: String,
    state: String,
    population: u64,
    crime_index: f64,
    change_from_last_year: f64,
}

impl From<CityEntry> for City {
    fn from(entry: CityEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            state: entry.state,
            population: entry.population,
            crime_index: entry.crime_index,
            change_from_last_year: entry.change_from_last_year,
        }
    }
}

/// The fixed, validated list of cities available to the dashboard.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    /// Never empty; checked in [`CityCatalog::new`].
    cities: Vec<City>,
}

impl CityCatalog {
    /// Builds a catalog from an explicit list of cities, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the list is empty, contains duplicate
    /// ids, or contains a city whose fields are out of range.
    pub fn new(cities: Vec<City>) -> Result<Self, CatalogError> {
        if cities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for city in &cities {
            validate_city(city)?;
            if !seen.insert(city.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: city.id.clone(),
                });
            }
        }

        log::debug!("Loaded city catalog with {} cities", cities.len());

        Ok(Self { cities })
    }

    /// Parses and validates a catalog from a TOML document containing
    /// `[[cities]]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed, or any
    /// validation error from [`CityCatalog::new`].
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(toml_str)?;
        Self::new(document.cities.into_iter().map(City::from).collect())
    }

    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded `cities.toml` fails to parse
    /// or validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CITIES_TOML)
    }

    /// Looks up a city by its identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// Returns every city matching `query` (case-insensitive substring of
    /// name or state), in catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&City> {
        self.cities.iter().filter(|city| city.matches(query)).collect()
    }

    /// Returns the city the dashboard opens on: the first catalog entry.
    #[must_use]
    pub fn default_city(&self) -> &City {
        &self.cities[0]
    }

    /// Returns up to `count` cities from the front of the catalog.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[City] {
        &self.cities[..count.min(self.cities.len())]
    }

    /// Returns all cities in catalog order.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns an iterator over all cities in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// Number of cities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false` for a successfully constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<'a> IntoIterator for &'a CityCatalog {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_city(city: &City) -> Result<(), CatalogError> {
    let invalid = |message: &str| CatalogError::InvalidCity {
        id: city.id.clone(),
        message: message.to_string(),
    };

    if city.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if city.population == 0 {
        return Err(invalid("population must be positive"));
    }
    if !city.crime_index.is_finite() || city.crime_index <= 0.0 {
        return Err(invalid("crime index must be a positive number"));
    }
    // The yearly trend compounds `1 - change / 100` backwards, which must
    // stay positive.
    if !city.change_from_last_year.is_finite()
        || city.change_from_last_year <= -100.0
        || city.change_from_last_year >= 100.0
    {
        return Err(invalid(
            "year-over-year change must be strictly between -100 and 100",
        ));
    }

    Ok(())
}
