//! Caller-owned trip state.
//!
//! A [`TripSession`] pins the route and vehicle for the lifetime of the trip
//! and owns the roster. Adding a passenger borrows the session mutably, so a
//! second allocation cannot start against the same roster until the first
//! has finished.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::allocate;
use crate::collaborators::{Geocoder, Router};
use crate::error::{FareError, FareResult};
use crate::ledger::{project, TripLedger};
use crate::model::{Passenger, Roster, Route, Vehicle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSession {
    route: Route,
    vehicle: Vehicle,
    #[serde(default)]
    passengers: Roster,
}

impl TripSession {
    pub fn new(route: Route, vehicle: Vehicle) -> FareResult<Self> {
        vehicle.validate()?;
        Ok(Self {
            route,
            vehicle,
            passengers: Roster::new(),
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn passengers(&self) -> &Roster {
        &self.passengers
    }

    pub fn can_add_passenger(&self) -> bool {
        !self.passengers.is_full()
    }

    /// Price a new passenger and append them to the roster.
    ///
    /// The roster is untouched unless the whole allocation succeeds. A blank
    /// name is rejected before any lookup.
    pub async fn add_passenger<G, R>(
        &mut self,
        name: &str,
        pickup_address: &str,
        drop_address: &str,
        geocoder: &G,
        router: &R,
    ) -> FareResult<&Passenger>
    where
        G: Geocoder,
        R: Router,
    {
        if name.trim().is_empty() {
            return Err(FareError::MissingPassengerName);
        }
        let quote = allocate(
            pickup_address,
            drop_address,
            &self.route,
            &self.vehicle,
            self.passengers.as_slice(),
            geocoder,
            router,
        )
        .await
        .inspect_err(|err| debug!("passenger '{name}' not added: {err}"))?;

        let passenger = quote.into_passenger(Uuid::new_v4().to_string(), name);
        info!(
            "added passenger '{}' ({:.1} km) at {:.2}",
            passenger.name, passenger.distance, passenger.cost
        );
        self.passengers.push(passenger)
    }

    pub fn remove_passenger(&mut self, id: &str) -> Option<Passenger> {
        self.passengers.remove(id)
    }

    pub fn ledger(&self) -> FareResult<TripLedger> {
        project(&self.route, &self.vehicle, self.passengers.as_slice())
    }
}

/// Geocode both ends of the main trip and route between them.
pub async fn resolve_route<G, R>(
    start_address: &str,
    end_address: &str,
    geocoder: &G,
    router: &R,
) -> FareResult<Route>
where
    G: Geocoder,
    R: Router,
{
    if start_address == end_address {
        return Err(FareError::DegenerateRoute {
            address: start_address.to_string(),
        });
    }
    let start_location = geocoder.resolve(start_address).await?;
    let end_location = geocoder.resolve(end_address).await?;
    let distance = router.distance_km(&start_location, &end_location).await?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(FareError::router(format!(
            "invalid route distance {distance} km"
        )));
    }
    Ok(Route {
        start_location,
        end_location,
        distance,
    })
}
