//! Ad-hoc query CLI over a school catalog.
//!
//! Loads the catalog from a CSV file and runs one proximity, grade, or
//! network query, printing matches as JSON with map links.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use linden::catalog::DEFAULT_RADIUS_MILES;
use linden::maps::google_maps_url;
use linden::models::{Coordinate, School};
use linden::Catalog;

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Query a school catalog by location, grades, or network")]
struct Args {
    /// CSV file holding the school data
    #[arg(short, long, default_value = "schools.csv")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schools within a radius of a point
    Nearby {
        /// Latitude of the center point, decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude of the center point, decimal degrees
        #[arg(long)]
        lon: f64,

        /// Search radius in miles
        #[arg(long, default_value_t = DEFAULT_RADIUS_MILES)]
        radius: f64,
    },

    /// Schools teaching all of the given grades
    Grades {
        /// Grade labels, e.g. PK K 1 .. 12
        grades: Vec<String>,
    },

    /// Schools in the exactly named network
    Network {
        /// Network name, matched case-sensitively
        network: String,
    },
}

/// One query match, serialized to JSON for output.
#[derive(Serialize)]
struct SchoolResult<'a> {
    #[serde(flatten)]
    school: &'a School,
    full_address: String,
    map_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_miles: Option<f64>,
}

impl<'a> SchoolResult<'a> {
    fn new(school: &'a School, distance_miles: Option<f64>) -> Self {
        Self {
            school,
            full_address: school.full_address(),
            map_url: google_maps_url(&school.location).to_string(),
            distance_miles,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let catalog = Catalog::load_from_path(&args.file)
        .with_context(|| format!("failed to load catalog from {}", args.file.display()))?;

    let results: Vec<SchoolResult<'_>> = match &args.command {
        Command::Nearby { lat, lon, radius } => {
            let center = Coordinate::from_degrees(*lat, *lon);
            info!("Searching within {} miles of {}", radius, center);
            catalog
                .nearby_schools(&center, *radius)
                .into_iter()
                .map(|s| SchoolResult::new(s, Some(s.distance_to(&center))))
                .collect()
        }
        Command::Grades { grades } => catalog
            .schools_by_grades(grades.iter().map(String::as_str))
            .into_iter()
            .map(|s| SchoolResult::new(s, None))
            .collect(),
        Command::Network { network } => catalog
            .schools_by_network(network)
            .into_iter()
            .map(|s| SchoolResult::new(s, None))
            .collect(),
    };

    info!("{} matching schools", results.len());
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
