use std::collections::HashMap;

use fare_core::collaborators::{GeocodeError, Geocoder};
use fare_core::model::Location;

/// Geocoder over a fixed set of known locations.
#[derive(Debug, Clone, Default)]
pub struct TableGeocoder {
    locations: HashMap<String, Location>,
}

impl TableGeocoder {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let locations = locations
            .into_iter()
            .map(|location| (location.address.clone(), location))
            .collect();
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Geocoder for TableGeocoder {
    async fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        self.locations
            .get(address)
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
    }
}
