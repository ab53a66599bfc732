//! OpenStreetMap Nominatim geocoding.

use std::time::Duration;

use fare_core::collaborators::{GeocodeError, Geocoder};
use fare_core::config::GeocoderConfig;
use fare_core::model::Location;
use log::debug;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::AdapterError;

/// Thin HTTP client for Nominatim `/search`.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    /// Create a client for the given endpoint (e.g. `https://nominatim.openstreetmap.org`).
    pub fn new(config: &GeocoderConfig) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    pub(crate) lat: String,
    pub(crate) lon: String,
}

/// Take the first hit. The returned location keeps the queried address.
pub(crate) fn parse_search_response(
    address: &str,
    places: Vec<NominatimPlace>,
) -> Result<Location, GeocodeError> {
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(address.to_string()))?;

    let lat = place.lat.trim().parse::<f64>();
    let lng = place.lon.trim().parse::<f64>();
    match (lat, lng) {
        (Ok(lat), Ok(lng)) if lat.is_finite() && lng.is_finite() => {
            Ok(Location::new(address, lat, lng))
        }
        _ => Err(GeocodeError::Unavailable(format!(
            "malformed coordinates '{}', '{}' for '{address}'",
            place.lat, place.lon
        ))),
    }
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        let mut url = Url::parse(&format!("{}/search", self.endpoint)).map_err(|err| {
            GeocodeError::Unavailable(format!("failed to build Nominatim URL: {err}"))
        })?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        debug!("geocoding '{address}'");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| GeocodeError::Unavailable(err.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|err| GeocodeError::Unavailable(err.to_string()))?;
        parse_search_response(address, places)
    }
}
