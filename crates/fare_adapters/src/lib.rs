//! Concrete collaborators for the allocation engine.
//!
//! Geocoders and routers, selectable through [`fare_core::config`]:
//!
//! - **`NominatimGeocoder`**: OpenStreetMap Nominatim search over HTTP.
//! - **`TableGeocoder`**: fixed address table, no network.
//! - **`OpenRouteServiceRouter`**: driving distance from the ORS directions API.
//! - **`StraightLineRouter`**: haversine distance times a detour factor.
//! - **`PrecomputedRouter`**: distance table loaded from JSON.
//!
//! Network-backed providers are wrapped in LRU caches by [`provider`].

pub mod cached;
pub mod error;
pub mod nominatim;
pub mod open_route_service;
pub mod precomputed;
pub mod provider;
pub mod straight_line;
pub mod table;

pub use cached::{CachedGeocoder, CachedRouter};
pub use error::AdapterError;
pub use nominatim::NominatimGeocoder;
pub use open_route_service::OpenRouteServiceRouter;
pub use precomputed::PrecomputedRouter;
pub use provider::{build_geocoder, build_router, AnyGeocoder, AnyRouter};
pub use straight_line::StraightLineRouter;
pub use table::TableGeocoder;
