//! Factory: build collaborators from configuration.
//!
//! The collaborator traits return `impl Future`, so they are not object-safe;
//! configured backends are dispatched through the [`AnyGeocoder`] and
//! [`AnyRouter`] enums instead of boxed trait objects.

use fare_core::collaborators::{GeocodeError, Geocoder, RouteError, Router};
use fare_core::config::{GeocoderConfig, RouterConfig, RouterKind};
use fare_core::model::Location;
use log::info;

use crate::cached::{CachedGeocoder, CachedRouter};
use crate::error::AdapterError;
use crate::nominatim::NominatimGeocoder;
use crate::open_route_service::OpenRouteServiceRouter;
use crate::precomputed::PrecomputedRouter;
use crate::straight_line::StraightLineRouter;
use crate::table::TableGeocoder;

pub enum AnyGeocoder {
    Nominatim(CachedGeocoder<NominatimGeocoder>),
    Table(TableGeocoder),
}

impl Geocoder for AnyGeocoder {
    async fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        match self {
            AnyGeocoder::Nominatim(geocoder) => geocoder.resolve(address).await,
            AnyGeocoder::Table(geocoder) => geocoder.resolve(address).await,
        }
    }
}

pub enum AnyRouter {
    OpenRouteService(CachedRouter<OpenRouteServiceRouter>),
    StraightLine(StraightLineRouter),
    Precomputed(PrecomputedRouter),
}

impl AnyRouter {
    pub fn kind(&self) -> RouterKind {
        match self {
            AnyRouter::OpenRouteService(_) => RouterKind::OpenRouteService,
            AnyRouter::StraightLine(_) => RouterKind::StraightLine,
            AnyRouter::Precomputed(_) => RouterKind::Precomputed,
        }
    }
}

impl Router for AnyRouter {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        match self {
            AnyRouter::OpenRouteService(router) => router.distance_km(from, to).await,
            AnyRouter::StraightLine(router) => router.distance_km(from, to).await,
            AnyRouter::Precomputed(router) => router.distance_km(from, to).await,
        }
    }
}

/// Nominatim behind an LRU cache of `config.cache_capacity` entries.
pub fn build_geocoder(config: &GeocoderConfig) -> Result<AnyGeocoder, AdapterError> {
    let geocoder = NominatimGeocoder::new(config)?;
    info!("geocoding via {}", config.endpoint);
    Ok(AnyGeocoder::Nominatim(CachedGeocoder::new(
        geocoder,
        config.cache_capacity,
    )))
}

/// Construct the router named by `config.kind`.
///
/// - `OpenRouteService` is wrapped in a [`CachedRouter`].
/// - `StraightLine` and `Precomputed` are local and returned uncached.
pub fn build_router(config: &RouterConfig) -> Result<AnyRouter, AdapterError> {
    let router = match config.kind {
        RouterKind::OpenRouteService => {
            let inner = OpenRouteServiceRouter::new(config)?;
            AnyRouter::OpenRouteService(CachedRouter::new(inner, config.cache_capacity))
        }
        RouterKind::StraightLine => {
            AnyRouter::StraightLine(StraightLineRouter::new(config.detour_factor))
        }
        RouterKind::Precomputed => {
            let path = config
                .table_path
                .as_deref()
                .ok_or(AdapterError::MissingTablePath)?;
            let router = PrecomputedRouter::from_file(path)?;
            info!("loaded {} precomputed routes from '{path}'", router.len());
            AnyRouter::Precomputed(router)
        }
    };
    Ok(router)
}
