//! The quote pipeline: resolve the main route, then price each planned
//! passenger in order.

use fare_core::collaborators::{Geocoder, Router};
use fare_core::model::Vehicle;
use fare_core::session::{resolve_route, TripSession};
use fare_core::FareError;
use log::{error, warn};

use crate::error::CliError;
use crate::trip_plan::TripPlan;

/// A planned passenger that could not be added.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPassenger {
    pub name: String,
    pub reason: FareError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteOutcome {
    pub session: TripSession,
    pub skipped: Vec<SkippedPassenger>,
}

/// Build a session from `plan`. Failing to resolve the main route aborts the
/// quote; a passenger that fails is recorded in `skipped` and the remaining
/// passengers are still processed.
pub async fn run_quote<G, R>(
    plan: &TripPlan,
    vehicle: Vehicle,
    geocoder: &G,
    router: &R,
) -> Result<QuoteOutcome, CliError>
where
    G: Geocoder,
    R: Router,
{
    let route = resolve_route(&plan.route.start, &plan.route.end, geocoder, router).await?;
    let mut session = TripSession::new(route, vehicle)?;
    let mut skipped = Vec::new();

    for passenger in &plan.passengers {
        let added = session
            .add_passenger(
                &passenger.name,
                &passenger.pickup,
                &passenger.drop,
                geocoder,
                router,
            )
            .await;
        if let Err(reason) = added {
            if reason.is_rejection() {
                warn!("skipping '{}': {reason}", passenger.name);
            } else {
                error!("could not price '{}': {reason}", passenger.name);
            }
            skipped.push(SkippedPassenger {
                name: passenger.name.clone(),
                reason,
            });
        }
    }

    Ok(QuoteOutcome { session, skipped })
}
