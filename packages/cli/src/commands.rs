//! Command-line arguments and one-shot command dispatch.

use clap::{Parser, Subcommand};
use crime_dashboard_crime_models::CrimeCategory;
use crime_dashboard_stats::{RandomSource, StatsProvider};
use thiserror::Error;

use crate::{OutputFormat, format_output, render};

/// Errors from running a one-shot command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No catalog city has the requested identifier.
    #[error("Unknown city: {id}")]
    UnknownCity {
        /// The identifier as given on the command line.
        id: String,
    },

    /// JSON serialization of the result failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "crime_dashboard",
    about = "Synthetic crime statistics for major Indian cities"
)]
pub struct Cli {
    /// Seed for reproducible output (overrides `CRIME_DASHBOARD_SEED`)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output format selected by `--json`.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List cities, optionally filtered by name or state
    Cities {
        /// Case-insensitive substring of the city name or state
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a city's crime overview
    City {
        /// City identifier (e.g., "delhi")
        id: String,
    },
    /// Show a city's five-year crime rate trend
    Trend {
        /// City identifier (e.g., "delhi")
        id: String,
    },
    /// Compare one crime category across all cities
    Compare {
        /// Category name (Violence, Theft, Cybercrime, Women, Children)
        category: CrimeCategory,
    },
    /// Show crime overviews for every city
    All,
    /// Show the featured cities
    Featured {
        /// Number of cities to show
        #[arg(long, default_value = "6")]
        count: usize,
    },
}

/// Runs one subcommand and returns its rendered output.
///
/// # Errors
///
/// * [`CliError::UnknownCity`] if `city` or `trend` names an id the catalog
///   does not contain
/// * [`CliError::Json`] if JSON serialization fails
pub fn execute(
    provider: &StatsProvider<'_>,
    command: Commands,
    format: OutputFormat,
    rng: &mut dyn RandomSource,
) -> Result<String, CliError> {
    log::debug!("Running {command:?}");

    let output = match command {
        Commands::Cities { search } => {
            let cities = provider.search_cities(search.as_deref().unwrap_or_default());
            format_output(format, &cities, || render::cities_table(&cities))?
        }
        Commands::City { id } => {
            let Some(record) = provider.get_city_data(&id, rng) else {
                return Err(CliError::UnknownCity { id });
            };
            format_output(format, &record, || render::record_table(&record))?
        }
        Commands::Trend { id } => {
            let Some((city, trend)) = provider.generate_yearly_trend_by_id(&id, rng) else {
                return Err(CliError::UnknownCity { id });
            };
            format_output(format, &trend, || render::trend_table(&city.name, &trend))?
        }
        Commands::Compare { category } => {
            let comparison = provider.generate_category_comparison(category, rng);
            format_output(format, &comparison, || {
                render::comparison_table(category, &comparison)
            })?
        }
        Commands::All => {
            let records = provider.get_all_cities_data(rng);
            format_output(format, &records, || {
                records
                    .iter()
                    .map(render::record_table)
                    .collect::<Vec<_>>()
                    .join("\n")
            })?
        }
        Commands::Featured { count } => {
            let featured = provider.catalog().featured(count);
            format_output(format, featured, || render::featured_table(featured))?
        }
    };

    Ok(output)
}
