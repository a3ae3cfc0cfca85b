//! matcha - find, map and submit matcha spots
//!
//! A command-line front end over the hosted `matcha_spots` table.

use clap::{Parser, Subcommand};
use matcha_core::config::Config;
use matcha_core::error::exit_codes;
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;

use commands::{categories, discover, health, map, submit, OutputFormat};

/// Discover the best matcha spots in the city
#[derive(Parser)]
#[command(name = "matcha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, env = "MATCHA_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List spots, filtered and sorted by distance
    Discover {
        /// Case-insensitive text to find in name, description or address
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category to show ("All" for every type)
        #[arg(short = 'C', long, default_value = "All")]
        category: String,

        /// Your location as LAT,LNG (falls back to MATCHA_LOCATION)
        #[arg(short, long, allow_hyphen_values = true)]
        near: Option<String>,
    },

    /// Show map markers for every located spot
    Map {
        /// Your location as LAT,LNG (falls back to MATCHA_LOCATION)
        #[arg(short, long, allow_hyphen_values = true)]
        near: Option<String>,

        /// Show the detail panel for one spot id
        #[arg(short, long)]
        select: Option<String>,

        /// Print the markers as a GeoJSON FeatureCollection
        #[arg(long)]
        geojson: bool,
    },

    /// Submit a new matcha spot
    Submit {
        /// Spot name
        #[arg(long, default_value = "")]
        name: String,

        /// Spot type, e.g. "Café" or "Bakery"
        #[arg(long = "type", default_value = "")]
        kind: String,

        /// Street address
        #[arg(long, default_value = "")]
        address: String,

        /// What makes this place special
        #[arg(long, default_value = "")]
        description: String,

        /// Website link
        #[arg(long, default_value = "")]
        website: String,

        /// Image link (a placeholder is used when empty)
        #[arg(long, default_value = "")]
        image: String,
    },

    /// List the categories offered by the filter and the submit form
    Categories,

    /// Check that the spot store and geocoder are reachable
    Health {
        /// Include response times
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut telemetry = matcha_telemetry::TelemetryConfig::from_verbosity(cli.verbose);
    telemetry.json = cli.log_json;
    if let Err(e) = matcha_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&anyhow::Error::new(e), cli.format),
    };
    tracing::debug!(path = ?config.path, city = %config.schema.city.name, "Configuration loaded");
    let schema = &config.schema;

    let result = match cli.command {
        Commands::Discover { query, category, near } => {
            discover::run(&query, &category, near.as_deref(), schema, cli.format).await
        }

        Commands::Map { near, select, geojson } => {
            map::run(near.as_deref(), select.as_deref(), geojson, schema, cli.format).await
        }

        Commands::Submit { name, kind, address, description, website, image } => {
            let form = matcha_spots::SubmissionForm {
                name,
                kind,
                description,
                address,
                website,
                image,
            };
            submit::run(form, schema, cli.format).await
        }

        Commands::Categories => categories::run(schema, cli.format),

        Commands::Health { detailed } => health::run(detailed, cli.format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format),
    }
}

/// Print an error and pick the exit code from its category.
fn report(err: &anyhow::Error, format: OutputFormat) -> ExitCode {
    let core = err.downcast_ref::<matcha_core::Error>();

    match (format, core) {
        (OutputFormat::Json, Some(core)) => {
            let report = serde_json::to_string_pretty(&core.to_report())
                .unwrap_or_else(|_| core.message.clone());
            eprintln!("{report}");
        }
        _ => eprintln!("{} {}", "Error:".red().bold(), err),
    }

    let code = core.map_or(exit_codes::FAILURE, matcha_core::Error::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
