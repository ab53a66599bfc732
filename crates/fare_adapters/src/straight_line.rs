//! Great-circle routing with no external dependencies.

use fare_core::collaborators::{RouteError, Router};
use fare_core::model::{Coordinate, Location};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Routes along the great circle, scaled by `detour_factor` to approximate
/// road distance.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    detour_factor: f64,
}

impl StraightLineRouter {
    /// Non-positive or non-finite factors fall back to 1.0.
    pub fn new(detour_factor: f64) -> Self {
        let detour_factor = if detour_factor.is_finite() && detour_factor > 0.0 {
            detour_factor
        } else {
            1.0
        };
        Self { detour_factor }
    }

    pub fn detour_factor(&self) -> f64 {
        self.detour_factor
    }
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Router for StraightLineRouter {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        Ok(haversine_km(from.coordinate(), to.coordinate()) * self.detour_factor)
    }
}
