//! Interactive mode for the dashboard CLI.
//!
//! Provides a menu-driven interface using `dialoguer`, mirroring the
//! dashboard's flow: search the city list, pick a city to see its record
//! and trend, or pick a category to compare across cities.

use crime_dashboard_city_models::City;
use crime_dashboard_crime_models::CrimeCategory;
use crime_dashboard_stats::{RandomSource, StatsProvider};
use dialoguer::{Input, Select};

use crate::render;

/// Number of featured cities shown on the overview.
const FEATURED_COUNT: usize = 6;

/// Top-level actions in the interactive menu.
enum DashboardAction {
    Featured,
    Search,
    CityOverview,
    Compare,
}

impl DashboardAction {
    const ALL: &[Self] = &[Self::Featured, Self::Search, Self::CityOverview, Self::Compare];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Show featured cities",
            Self::Search => "Search cities",
            Self::CityOverview => "Show a city's crime overview",
            Self::Compare => "Compare a category across cities",
        }
    }
}

/// Runs the interactive dashboard menu.
///
/// # Errors
///
/// Returns an error if a user prompt fails.
pub fn run(
    provider: &StatsProvider<'_>,
    rng: &mut dyn RandomSource,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crime Statistics Dashboard");
    println!();

    let labels: Vec<&str> = DashboardAction::ALL
        .iter()
        .map(DashboardAction::label)
        .collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match DashboardAction::ALL[idx] {
        DashboardAction::Featured => {
            print!(
                "{}",
                render::featured_table(provider.catalog().featured(FEATURED_COUNT))
            );
        }
        DashboardAction::Search => handle_search(provider)?,
        DashboardAction::CityOverview => handle_city(provider, rng)?,
        DashboardAction::Compare => handle_compare(provider, rng)?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Prompts for a query and lists matching cities. An empty query lists
/// every city.
fn handle_search(provider: &StatsProvider<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let query: String = Input::new()
        .with_prompt("Search cities (name or state)")
        .allow_empty(true)
        .interact_text()?;

    print!("{}", render::cities_table(&provider.search_cities(&query)));
    Ok(())
}

/// Lets the user pick a city, then prints its record and yearly trend.
fn handle_city(
    provider: &StatsProvider<'_>,
    rng: &mut dyn RandomSource,
) -> Result<(), Box<dyn std::error::Error>> {
    let city = pick_city(provider)?;

    if let Some(record) = provider.get_city_data(&city.id, rng) {
        print!("{}", render::record_table(&record));
    }

    println!();
    let trend = provider.generate_yearly_trend(city, rng);
    print!("{}", render::trend_table(&city.name, &trend));

    Ok(())
}

/// Lets the user pick a category, then prints the cross-city comparison.
fn handle_compare(
    provider: &StatsProvider<'_>,
    rng: &mut dyn RandomSource,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<String> = CrimeCategory::all()
        .iter()
        .map(ToString::to_string)
        .collect();

    let idx = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    let category = CrimeCategory::all()[idx];
    let comparison = provider.generate_category_comparison(category, rng);
    print!("{}", render::comparison_table(category, &comparison));

    Ok(())
}

/// Shows a city picker, defaulting to the catalog's first city.
fn pick_city<'a>(provider: &StatsProvider<'a>) -> Result<&'a City, Box<dyn std::error::Error>> {
    let cities = provider.catalog().cities();
    let labels: Vec<String> = cities
        .iter()
        .map(|c| format!("{} ({})", c.name, c.state))
        .collect();

    let idx = Select::new()
        .with_prompt("City")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(&cities[idx])
}
