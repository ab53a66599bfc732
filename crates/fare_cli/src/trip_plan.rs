//! Trip plan files: the main route, an optional vehicle and the passengers
//! to add in order.
//!
//! ```toml
//! [route]
//! start = "Depot"
//! end = "Airport"
//!
//! [vehicle]
//! average_mileage = 13.0
//! fuel_price = 100.0
//!
//! [[passengers]]
//! name = "Asha"
//! pickup = "Harbour"
//! drop = "Old Town"
//!
//! # only used with --offline
//! [[locations]]
//! address = "Depot"
//! lat = 0.0
//! lng = 0.0
//! ```

use std::path::Path;

use fare_core::model::{Location, Vehicle};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutePlan {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PassengerPlan {
    pub name: String,
    pub pickup: String,
    pub drop: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripPlan {
    pub route: RoutePlan,
    /// Overrides the configured vehicle when present.
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub passengers: Vec<PassengerPlan>,
    /// Known coordinates for offline geocoding.
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl TripPlan {
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| CliError::TripPlan {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn vehicle_or(&self, fallback: Vehicle) -> Vehicle {
        self.vehicle.unwrap_or(fallback)
    }
}
