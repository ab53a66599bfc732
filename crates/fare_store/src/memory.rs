//! Process-local stores backed by `Mutex<Vec<_>>`.

use std::sync::{Mutex, MutexGuard};

use fare_core::model::Route;
use fare_core::session::TripSession;
use log::info;

use crate::error::{StoreError, StoreResult};
use crate::feedback::{FeedbackRecord, FeedbackStore, NewFeedback};
use crate::records::{NewPassenger, PassengerRecord, RideRecord, RideStore, VehicleUpdate};

fn lock<T>(mutex: &Mutex<T>) -> StoreResult<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| StoreError::Poisoned)
}

#[derive(Debug, Default)]
pub struct InMemoryRideStore {
    rides: Mutex<Vec<RideRecord>>,
}

impl InMemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, ride: RideRecord) -> StoreResult<RideRecord> {
        lock(&self.rides)?.push(ride.clone());
        info!("stored ride {}", ride.id);
        Ok(ride)
    }

    fn with_ride<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut RideRecord) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut rides = lock(&self.rides)?;
        let ride = rides
            .iter_mut()
            .find(|ride| ride.id == id)
            .ok_or_else(|| StoreError::RideNotFound(id.to_string()))?;
        f(ride)
    }
}

impl RideStore for InMemoryRideStore {
    fn create_ride(&self, route: Route) -> StoreResult<RideRecord> {
        self.insert(RideRecord::new(route))
    }

    fn list_rides(&self) -> StoreResult<Vec<RideRecord>> {
        let mut rides: Vec<_> = lock(&self.rides)?.iter().rev().cloned().collect();
        rides.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rides)
    }

    fn get_ride(&self, id: &str) -> StoreResult<RideRecord> {
        self.with_ride(id, |ride| Ok(ride.clone()))
    }

    fn add_passenger(&self, ride_id: &str, passenger: NewPassenger) -> StoreResult<PassengerRecord> {
        passenger.validate()?;
        self.with_ride(ride_id, |ride| {
            let record = passenger.into_record();
            ride.total_cost += record.cost;
            ride.passengers.push(record.clone());
            Ok(record)
        })
    }

    fn update_vehicle(&self, ride_id: &str, update: VehicleUpdate) -> StoreResult<RideRecord> {
        let vehicle = update.into_vehicle()?;
        self.with_ride(ride_id, |ride| {
            ride.vehicle = vehicle;
            Ok(ride.clone())
        })
    }

    fn save_session(&self, session: &TripSession) -> StoreResult<RideRecord> {
        self.insert(RideRecord::from_session(session)?)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    entries: Mutex<Vec<FeedbackRecord>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn submit_feedback(&self, feedback: NewFeedback) -> StoreResult<FeedbackRecord> {
        let record = feedback.into_record()?;
        lock(&self.entries)?.push(record.clone());
        Ok(record)
    }

    fn list_feedback(&self) -> StoreResult<Vec<FeedbackRecord>> {
        Ok(lock(&self.entries)?.clone())
    }
}
