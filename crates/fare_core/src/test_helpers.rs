//! Test helpers: in-memory collaborators and fixtures shared by unit,
//! integration and benchmark code.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collaborators::{GeocodeError, Geocoder, RouteError, Router};
use crate::model::{Location, Passenger, Route, Vehicle};

/// 100 km main route from (0,0) to (1,1).
pub fn test_route() -> Route {
    Route {
        start_location: Location::new("Depot", 0.0, 0.0),
        end_location: Location::new("Airport", 1.0, 1.0),
        distance: 100.0,
    }
}

/// 10 km per unit at 100 per unit, so the test route costs 1000.
pub fn test_vehicle() -> Vehicle {
    Vehicle::new(10.0, 100.0)
}

pub fn test_passenger(id: &str, pickup: Location, drop: Location, distance: f64, cost: f64) -> Passenger {
    Passenger {
        id: id.to_string(),
        name: format!("Passenger {id}"),
        pickup_location: pickup,
        drop_location: drop,
        distance,
        cost,
    }
}

/// Geocoder backed by a fixed address table. Counts every call.
#[derive(Debug, Default)]
pub struct FakeGeocoder {
    locations: HashMap<String, Location>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.locations
            .insert(address.to_string(), Location::new(address, lat, lng));
        self
    }

    /// Every call fails as if the service were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for FakeGeocoder {
    async fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(GeocodeError::Unavailable("connection refused".to_string()));
        }
        self.locations
            .get(address)
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
    }
}

/// Router returning per-pair distances, or a default for unknown pairs.
#[derive(Debug, Default)]
pub struct FakeRouter {
    distances: HashMap<(String, String), f64>,
    default_km: Option<f64>,
    calls: AtomicUsize,
}

impl FakeRouter {
    /// Every pair is `km` apart.
    pub fn fixed(km: f64) -> Self {
        Self {
            default_km: Some(km),
            ..Self::default()
        }
    }

    /// Unknown pairs are unreachable.
    pub fn table() -> Self {
        Self::default()
    }

    pub fn with(mut self, from: &str, to: &str, km: f64) -> Self {
        self.distances.insert((from.to_string(), to.to_string()), km);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Router for FakeRouter {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.distances
            .get(&(from.address.clone(), to.address.clone()))
            .copied()
            .or(self.default_km)
            .ok_or_else(|| RouteError::unreachable(from, to))
    }
}
