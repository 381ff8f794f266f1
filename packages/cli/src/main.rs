#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for browsing synthetic crime statistics.
//!
//! ```text
//! crime_dashboard cities [--search <query>]
//! crime_dashboard city <id>
//! crime_dashboard trend <id>
//! crime_dashboard compare <category>
//! crime_dashboard all
//! crime_dashboard featured [--count 6]
//! ```
//!
//! Running `crime_dashboard` with no subcommand enters interactive mode.

use clap::Parser;
use crime_dashboard_city::CityCatalog;
use crime_dashboard_cli::{Cli, CliError, execute, interactive};
use crime_dashboard_stats::{StatsConfig, StatsProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let format = cli.format();

    let catalog = CityCatalog::builtin()?;
    let mut config = StatsConfig::from_env()?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let provider = StatsProvider::new(&catalog, config);
    let mut rng = config.random_source();
    crime_dashboard_cli::log_startup(&provider);

    let Some(command) = cli.command else {
        return interactive::run(&provider, &mut rng);
    };

    match execute(&provider, command, format, &mut rng) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(CliError::UnknownCity { id }) => {
            eprintln!("Unknown city: {id}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
