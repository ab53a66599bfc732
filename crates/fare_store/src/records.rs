//! Ride records and the store contract over them.

use chrono::{DateTime, Utc};
use fare_core::model::{Location, Passenger, Route, Vehicle};
use fare_core::session::TripSession;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRecord {
    pub id: String,
    pub name: String,
    pub pickup_location: Location,
    pub drop_location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub cost: f64,
}

impl From<&Passenger> for PassengerRecord {
    fn from(passenger: &Passenger) -> Self {
        Self {
            id: passenger.id.clone(),
            name: passenger.name.clone(),
            pickup_location: passenger.pickup_location.clone(),
            drop_location: passenger.drop_location.clone(),
            distance: Some(passenger.distance),
            cost: passenger.cost,
        }
    }
}

/// A stored ride. `total_cost` and `cost_per_person` are snapshots taken
/// when the record was written and are never recomputed by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRecord {
    pub id: String,
    pub start_location: Location,
    pub end_location: Location,
    pub distance: f64,
    pub passengers: Vec<PassengerRecord>,
    pub vehicle: Vehicle,
    pub total_cost: f64,
    pub cost_per_person: f64,
    pub created_at: DateTime<Utc>,
}

impl RideRecord {
    /// A fresh ride with placeholder vehicle and zero costs.
    pub fn new(route: Route) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_location: route.start_location,
            end_location: route.end_location,
            distance: route.distance,
            passengers: Vec::new(),
            vehicle: Vehicle::new(0.0, 0.0),
            total_cost: 0.0,
            cost_per_person: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Snapshot a priced session, including its ledger totals.
    pub fn from_session(session: &TripSession) -> StoreResult<Self> {
        let ledger = session.ledger()?;
        let mut record = Self::new(session.route().clone());
        record.vehicle = *session.vehicle();
        record.passengers = session.passengers().iter().map(PassengerRecord::from).collect();
        record.total_cost = ledger.total_trip_cost;
        record.cost_per_person = ledger.cost_per_person();
        Ok(record)
    }
}

/// Passenger payload for attaching a pre-priced passenger to a stored ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPassenger {
    pub name: String,
    pub pickup_location: Location,
    pub drop_location: Location,
    pub cost: f64,
}

impl NewPassenger {
    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("Missing required fields: name"));
        }
        if !self.cost.is_finite() {
            return Err(StoreError::validation("cost must be a finite number"));
        }
        Ok(())
    }

    pub(crate) fn into_record(self) -> PassengerRecord {
        PassengerRecord {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            pickup_location: self.pickup_location,
            drop_location: self.drop_location,
            distance: None,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdate {
    pub mileage: f64,
    pub fuel_price: f64,
}

impl VehicleUpdate {
    pub(crate) fn into_vehicle(self) -> StoreResult<Vehicle> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.mileage) || !valid(self.fuel_price) {
            return Err(StoreError::validation(
                "Mileage and fuel price are required",
            ));
        }
        Ok(Vehicle::new(self.mileage, self.fuel_price))
    }
}

/// Ride persistence. Implementations use interior mutability so a store can
/// be shared behind `&`.
pub trait RideStore: Send + Sync {
    fn create_ride(&self, route: Route) -> StoreResult<RideRecord>;

    /// Newest first.
    fn list_rides(&self) -> StoreResult<Vec<RideRecord>>;

    fn get_ride(&self, id: &str) -> StoreResult<RideRecord>;

    /// Append a passenger and add their cost to the ride's `total_cost`
    /// snapshot. No allocation is run.
    fn add_passenger(&self, ride_id: &str, passenger: NewPassenger) -> StoreResult<PassengerRecord>;

    fn update_vehicle(&self, ride_id: &str, update: VehicleUpdate) -> StoreResult<RideRecord>;

    /// Persist a finalized session as a new ride.
    fn save_session(&self, session: &TripSession) -> StoreResult<RideRecord>;
}
