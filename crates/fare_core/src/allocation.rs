//! Cost allocation: prices one candidate passenger against the main route
//! and the passengers already on board.
//!
//! Formula, with `B` the main trip's total cost and `n` the passenger count
//! including the candidate:
//!
//! ```text
//! base_share = B * (leg_km / route_km / n)
//! multiplier = max(MIN_COST_MULTIPLIER, 1 - overlap * OVERLAP_DISCOUNT_RATE)
//! cost       = min(round2(base_share * multiplier), B * PASSENGER_COST_CAP_RATE)
//! ```
//!
//! The floor and the cap are independent policy knobs.

use log::debug;
use serde::Serialize;

use crate::collaborators::{Geocoder, Router};
use crate::error::{FareError, FareResult};
use crate::model::{Location, Passenger, Route, Vehicle, MAX_PASSENGERS};
use crate::overlap::combined_overlap;
use crate::pricing::trip_cost;

/// Share of the base cost a full overlap can discount.
pub const OVERLAP_DISCOUNT_RATE: f64 = 0.3;

/// Lower bound on the cost multiplier.
pub const MIN_COST_MULTIPLIER: f64 = 0.4;

/// Ceiling on a single passenger's cost as a fraction of the main trip cost.
pub const PASSENGER_COST_CAP_RATE: f64 = 0.3;

/// A candidate leg whose endpoints and distance are already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateLeg {
    pub pickup: Location,
    pub drop: Location,
    pub distance_km: f64,
}

/// Outcome of pricing one candidate, with the intermediates that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub distance: f64,
    pub cost: f64,
    pub overlap: f64,
    pub distance_ratio: f64,
    pub base_share: f64,
    pub cost_multiplier: f64,
    pub uncapped_cost: f64,
    pub cap: f64,
}

/// A priced candidate together with its geocoded endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerQuote {
    pub pickup: Location,
    pub drop: Location,
    pub allocation: Allocation,
}

impl PassengerQuote {
    pub fn into_passenger(self, id: impl Into<String>, name: impl Into<String>) -> Passenger {
        Passenger {
            id: id.into(),
            name: name.into(),
            pickup_location: self.pickup,
            drop_location: self.drop,
            distance: self.allocation.distance,
            cost: self.allocation.cost,
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check_roster(existing: &[Passenger]) -> FareResult<()> {
    if existing.len() >= MAX_PASSENGERS {
        return Err(FareError::RosterFull {
            max: MAX_PASSENGERS,
        });
    }
    Ok(())
}

fn check_distinct(pickup_address: &str, drop_address: &str) -> FareResult<()> {
    if pickup_address == drop_address {
        return Err(FareError::DegenerateRoute {
            address: pickup_address.to_string(),
        });
    }
    Ok(())
}

/// Price a leg whose endpoints and distance are already known.
///
/// Pure: identical inputs always produce the identical allocation.
pub fn allocate_leg(
    leg: &CandidateLeg,
    route: &Route,
    vehicle: &Vehicle,
    existing: &[Passenger],
) -> FareResult<Allocation> {
    check_roster(existing)?;
    check_distinct(&leg.pickup.address, &leg.drop.address)?;
    if !leg.distance_km.is_finite() || leg.distance_km < 0.0 {
        return Err(FareError::router(format!(
            "invalid leg distance {} km",
            leg.distance_km
        )));
    }

    let main_cost = trip_cost(route.distance, vehicle)?.total;
    let passenger_count = (existing.len() + 1) as f64;

    // A zero-length main route has zero cost, and the cap pins every share to 0.
    let distance_ratio = if route.distance > 0.0 {
        leg.distance_km / route.distance
    } else {
        0.0
    };
    let base_share = main_cost * (distance_ratio / passenger_count);

    let overlap = combined_overlap(&leg.pickup, &leg.drop, route, existing);
    let cost_multiplier = (1.0 - overlap * OVERLAP_DISCOUNT_RATE).max(MIN_COST_MULTIPLIER);

    let uncapped_cost = round_cents(base_share * cost_multiplier);
    let cap = main_cost * PASSENGER_COST_CAP_RATE;
    let cost = uncapped_cost.min(cap);

    debug!(
        "allocated leg '{}' -> '{}': {:.2} km, overlap {:.3}, base {:.2}, multiplier {:.2}, cost {:.2} (cap {:.2})",
        leg.pickup.address, leg.drop.address, leg.distance_km, overlap, base_share, cost_multiplier, cost, cap
    );

    Ok(Allocation {
        distance: leg.distance_km,
        cost,
        overlap,
        distance_ratio,
        base_share,
        cost_multiplier,
        uncapped_cost,
        cap,
    })
}

/// Resolve a candidate's addresses, route the leg, and price it.
///
/// Checks run in order and the first failure wins: roster capacity, distinct
/// addresses, vehicle economics, then geocoding. Nothing is fetched for a
/// candidate that would be rejected anyway.
pub async fn allocate<G, R>(
    pickup_address: &str,
    drop_address: &str,
    route: &Route,
    vehicle: &Vehicle,
    existing: &[Passenger],
    geocoder: &G,
    router: &R,
) -> FareResult<PassengerQuote>
where
    G: Geocoder,
    R: Router,
{
    check_roster(existing)?;
    check_distinct(pickup_address, drop_address)?;
    vehicle.validate()?;

    let pickup = geocoder.resolve(pickup_address).await.inspect_err(|err| {
        debug!("geocoding pickup '{pickup_address}' failed: {err}");
    })?;
    let drop = geocoder.resolve(drop_address).await.inspect_err(|err| {
        debug!("geocoding drop '{drop_address}' failed: {err}");
    })?;

    let distance_km = router.distance_km(&pickup, &drop).await.inspect_err(|err| {
        debug!("routing '{pickup_address}' -> '{drop_address}' failed: {err}");
    })?;

    let leg = CandidateLeg {
        pickup,
        drop,
        distance_km,
    };
    let allocation = allocate_leg(&leg, route, vehicle, existing)?;
    Ok(PassengerQuote {
        pickup: leg.pickup,
        drop: leg.drop,
        allocation,
    })
}
