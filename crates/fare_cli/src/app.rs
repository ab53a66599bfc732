use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fare_adapters::{build_geocoder, build_router, StraightLineRouter, TableGeocoder};
use fare_core::config::FareConfig;
use fare_core::session::TripSession;
use fare_store::RideRecord;
use log::info;

use crate::error::CliError;
use crate::quote::{run_quote, QuoteOutcome};
use crate::report::{render_skipped, LedgerReport};
use crate::trip_plan::TripPlan;

/// split the fuel cost of a shared ride between a driver and co-riders
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FareCliArguments {
    #[command(subcommand)]
    pub op: FareOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FareOperation {
    /// price every passenger of a trip plan and print the ledger
    Quote {
        /// trip plan TOML file
        #[arg(short, long)]
        trip: PathBuf,
        /// service configuration TOML file
        #[arg(short, long, env = "FARE_CONFIG")]
        config: Option<PathBuf>,
        /// geocode from the plan's [[locations]] and use straight-line distances
        #[arg(long)]
        offline: bool,
        /// write the resulting session as JSON for later `ledger` runs
        #[arg(long)]
        save_session: Option<PathBuf>,
        /// print a ride record as JSON instead of the text ledger
        #[arg(long)]
        json: bool,
    },
    /// recompute and print the ledger of a saved session
    Ledger {
        /// session JSON file written by `quote --save-session`
        #[arg(short, long)]
        session: PathBuf,
        /// print a ride record as JSON instead of the text ledger
        #[arg(long)]
        json: bool,
    },
}

impl FareOperation {
    pub async fn run(&self) -> Result<(), CliError> {
        match self {
            FareOperation::Quote {
                trip,
                config,
                offline,
                save_session,
                json,
            } => {
                let config = match config {
                    Some(path) => FareConfig::from_file(path)?,
                    None => FareConfig::default(),
                };
                let plan = TripPlan::from_file(trip)?;
                let outcome = quote(&plan, &config, *offline).await?;

                if let Some(path) = save_session {
                    write_session(&outcome.session, path)?;
                }
                eprint!("{}", render_skipped(&outcome.skipped));
                print_session(&outcome.session, *json)
            }
            FareOperation::Ledger { session, json } => {
                let session = read_session(session)?;
                print_session(&session, *json)
            }
        }
    }
}

/// Run the quote pipeline against either the configured services or the
/// offline table geocoder with straight-line routing.
pub async fn quote(
    plan: &TripPlan,
    config: &FareConfig,
    offline: bool,
) -> Result<QuoteOutcome, CliError> {
    let vehicle = plan.vehicle_or(config.vehicle);
    if offline {
        info!("quoting offline with {} known locations", plan.locations.len());
        let geocoder = TableGeocoder::new(plan.locations.iter().cloned());
        let router = StraightLineRouter::new(config.router.detour_factor);
        run_quote(plan, vehicle, &geocoder, &router).await
    } else {
        let geocoder = build_geocoder(&config.geocoder)?;
        let router = build_router(&config.router)?;
        info!("quoting with {:?} router", router.kind());
        run_quote(plan, vehicle, &geocoder, &router).await
    }
}

pub fn read_session(path: &Path) -> Result<TripSession, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Session {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_session(session: &TripSession, path: &Path) -> Result<(), CliError> {
    let raw = serde_json::to_string_pretty(session)?;
    std::fs::write(path, raw).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("session written to {}", path.display());
    Ok(())
}

fn print_session(session: &TripSession, json: bool) -> Result<(), CliError> {
    if json {
        let record = RideRecord::from_session(session)?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", LedgerReport(&session.ledger()?));
    }
    Ok(())
}
