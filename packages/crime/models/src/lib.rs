#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime category taxonomy and calendar month labels.
//!
//! This crate defines the closed set of crime categories reported by the
//! dashboard, along with the fixed weight table that drives synthetic
//! incident counts for each category. Both sets are fixed at compile time
//! and never change at runtime.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Base fraction and jitter range applied to a city's crime index when
/// generating an incident count for one category.
///
/// A generated count is `floor(crime_index * (base + r * jitter))` where `r`
/// is drawn uniformly from `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeight {
    /// Fraction of the crime index that is always attributed to the category.
    pub base: f64,
    /// Upper bound of the random fraction added on top of `base`.
    pub jitter: f64,
}

impl CategoryWeight {
    /// Smallest fraction of the crime index this weight can produce.
    #[must_use]
    pub const fn min_fraction(self) -> f64 {
        self.base
    }

    /// Exclusive upper bound of the fraction this weight can produce.
    #[must_use]
    pub const fn max_fraction(self) -> f64 {
        self.base + self.jitter
    }
}

/// Top-level crime categories shown on the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CrimeCategory {
    /// Violent crimes against persons
    Violence,
    /// Theft and other property crimes
    Theft,
    /// Online fraud, hacking, and other cyber offenses
    Cybercrime,
    /// Crimes against women
    Women,
    /// Crimes against children
    Children,
}

impl CrimeCategory {
    /// Returns the weight used to derive this category's incident count
    /// from a city's crime index.
    #[must_use]
    pub const fn weight(self) -> CategoryWeight {
        match self {
            Self::Violence | Self::Women => CategoryWeight {
                base: 0.20,
                jitter: 0.10,
            },
            Self::Theft => CategoryWeight {
                base: 0.30,
                jitter: 0.15,
            },
            Self::Cybercrime => CategoryWeight {
                base: 0.15,
                jitter: 0.10,
            },
            Self::Children => CategoryWeight {
                base: 0.15,
                jitter: 0.05,
            },
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Violence,
            Self::Theft,
            Self::Cybercrime,
            Self::Women,
            Self::Children,
        ]
    }
}

/// Calendar months, labelled with their three-letter English abbreviation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Month {
    /// January
    Jan,
    /// February
    Feb,
    /// March
    Mar,
    /// April
    Apr,
    /// May
    May,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Aug,
    /// September
    Sep,
    /// October
    Oct,
    /// November
    Nov,
    /// December
    Dec,
}

impl Month {
    /// Returns all months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Jan,
            Self::Feb,
            Self::Mar,
            Self::Apr,
            Self::May,
            Self::Jun,
            Self::Jul,
            Self::Aug,
            Self::Sep,
            Self::Oct,
            Self::Nov,
            Self::Dec,
        ]
    }
}
