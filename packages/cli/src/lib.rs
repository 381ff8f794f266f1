#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line viewer for the crime dashboard statistics.
//!
//! The binary is a thin presentation layer: it forwards selections (city,
//! category, search query) to [`StatsProvider`] and prints the results as
//! plain-text tables or JSON.

pub mod commands;
pub mod interactive;
pub mod render;

pub use commands::{Cli, CliError, Commands, execute};

use crime_dashboard_stats::StatsProvider;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text tables.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Renders `value` as pretty JSON, or returns the table produced by `table`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_output<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => table(),
    })
}

/// Logs a one-line summary of the provider's catalog and configuration.
pub fn log_startup(provider: &StatsProvider<'_>) {
    let config = provider.config();
    log::info!(
        "Loaded {} cities (reporting year {}, trends through {}, seed {})",
        provider.catalog().len(),
        config.reporting_year,
        config.current_year,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );
}
