//! Trip ledger: driver vs. passenger reconciliation.
//!
//! The ledger is a pure projection of `(route, vehicle, roster)`. It holds no
//! state of its own and is recomputed whenever any input changes.

use serde::Serialize;

use crate::error::FareResult;
use crate::model::{Passenger, Route, Vehicle};
use crate::pricing::{trip_cost, TripCost};

/// Per-passenger view of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerShare {
    pub id: String,
    pub name: String,
    pub pickup_address: String,
    pub drop_address: String,
    pub distance: f64,
    pub cost: f64,
    /// What driving the passenger's leg alone would have cost.
    pub solo_cost: f64,
    /// `solo_cost - cost`; negative when the allocated cost exceeds a solo trip.
    pub savings: f64,
    /// `cost / total_trip_cost * 100`, or 0 when the trip costs nothing.
    pub share_of_total_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLedger {
    pub route_distance: f64,
    pub main_trip: TripCost,
    pub total_trip_cost: f64,
    pub passengers_total: f64,
    /// `total_trip_cost - passengers_total`. Not clamped; may be negative.
    pub driver_share: f64,
    pub passengers: Vec<PassengerShare>,
}

impl TripLedger {
    /// Total cost split evenly across the driver and every passenger.
    pub fn cost_per_person(&self) -> f64 {
        self.total_trip_cost / (self.passengers.len() + 1) as f64
    }

    pub fn driver_share_is_negative(&self) -> bool {
        self.driver_share < 0.0
    }
}

/// Build the ledger for a trip.
pub fn project(route: &Route, vehicle: &Vehicle, passengers: &[Passenger]) -> FareResult<TripLedger> {
    let main_trip = trip_cost(route.distance, vehicle)?;
    let total_trip_cost = main_trip.total;
    let passengers_total: f64 = passengers.iter().map(|p| p.cost).sum();

    let shares = passengers
        .iter()
        .map(|p| {
            let solo_cost = trip_cost(p.distance, vehicle)?.total;
            let share_of_total_pct = if total_trip_cost == 0.0 {
                0.0
            } else {
                p.cost / total_trip_cost * 100.0
            };
            Ok(PassengerShare {
                id: p.id.clone(),
                name: p.name.clone(),
                pickup_address: p.pickup_location.address.clone(),
                drop_address: p.drop_location.address.clone(),
                distance: p.distance,
                cost: p.cost,
                solo_cost,
                savings: solo_cost - p.cost,
                share_of_total_pct,
            })
        })
        .collect::<FareResult<Vec<_>>>()?;

    Ok(TripLedger {
        route_distance: route.distance,
        main_trip,
        total_trip_cost,
        passengers_total,
        driver_share: total_trip_cost - passengers_total,
        passengers: shares,
    })
}
