//! Seams to the external geocoding and routing services.
//!
//! Both are asynchronous and fallible. Implementations live in
//! `fare_adapters`; the engine only awaits them.

use std::future::Future;

use thiserror::Error;

use crate::model::Location;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("no coordinates found for address '{0}'")]
    NotFound(String),
    #[error("geocoder request failed: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("no route between '{from}' and '{to}'")]
    Unreachable { from: String, to: String },
    #[error("router request failed: {0}")]
    Unavailable(String),
}

impl RouteError {
    pub fn unreachable(from: &Location, to: &Location) -> Self {
        RouteError::Unreachable {
            from: from.address.clone(),
            to: to.address.clone(),
        }
    }
}

/// Maps a free-text address to a [`Location`].
pub trait Geocoder: Send + Sync {
    fn resolve(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Location, GeocodeError>> + Send;
}

/// Travel distance between two resolved locations, in kilometres.
///
/// Locations carry both the display address and the coordinate, so
/// implementations may key on either.
pub trait Router: Send + Sync {
    fn distance_km(
        &self,
        from: &Location,
        to: &Location,
    ) -> impl Future<Output = Result<f64, RouteError>> + Send;
}
