//! Driving distance from the OpenRouteService directions API.

use std::time::Duration;

use fare_core::collaborators::{RouteError, Router};
use fare_core::config::RouterConfig;
use fare_core::model::Location;
use log::debug;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::AdapterError;

/// Routes via `GET /v2/directions/driving-car`.
#[derive(Debug, Clone)]
pub struct OpenRouteServiceRouter {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenRouteServiceRouter {
    pub fn new(config: &RouterConfig) -> Result<Self, AdapterError> {
        let api_key = config.resolved_api_key().ok_or(AdapterError::MissingApiKey)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Minimal GeoJSON directions response.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub(crate) features: Vec<DirectionsFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsFeature {
    pub(crate) properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureProperties {
    pub(crate) summary: RouteSummary,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RouteSummary {
    /// Metres. Omitted by the API when start and end coincide.
    #[serde(default)]
    pub(crate) distance: f64,
}

pub(crate) fn parse_directions_response(
    resp: DirectionsResponse,
    from: &Location,
    to: &Location,
) -> Result<f64, RouteError> {
    let feature = resp
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::unreachable(from, to))?;
    let metres = feature.properties.summary.distance;
    if !metres.is_finite() || metres < 0.0 {
        return Err(RouteError::Unavailable(format!(
            "invalid route distance {metres} m"
        )));
    }
    Ok(metres / 1000.0)
}

fn lng_lat(location: &Location) -> String {
    format!("{:.6},{:.6}", location.lng, location.lat)
}

impl Router for OpenRouteServiceRouter {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        let mut url = Url::parse(&format!("{}/v2/directions/driving-car", self.endpoint))
            .map_err(|err| RouteError::Unavailable(format!("failed to build ORS URL: {err}")))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("start", &lng_lat(from))
            .append_pair("end", &lng_lat(to));

        debug!("routing '{}' -> '{}'", from.address, to.address);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| RouteError::Unavailable(err.without_url().to_string()))?;

        let parsed: DirectionsResponse = response
            .json()
            .await
            .map_err(|err| RouteError::Unavailable(err.to_string()))?;
        parse_directions_response(parsed, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends() -> (Location, Location) {
        (
            Location::new("Connaught Place", 28.6315, 77.2167),
            Location::new("Cyber City", 28.4950, 77.0895),
        )
    }

    #[test]
    fn distance_is_converted_to_kilometres() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"properties": {"summary": {"distance": 27345.6, "duration": 2400.0}}},
                {"properties": {"summary": {"distance": 1.0}}}
            ]
        }"#;
        let parsed: DirectionsResponse = serde_json::from_str(raw).expect("payload");
        let (from, to) = ends();
        let km = parse_directions_response(parsed, &from, &to).expect("should parse");
        assert!((km - 27.3456).abs() < 1e-9);
    }

    #[test]
    fn no_features_is_unreachable() {
        let parsed: DirectionsResponse = serde_json::from_str(r#"{"type": "FeatureCollection"}"#).expect("payload");
        let (from, to) = ends();
        let err = parse_directions_response(parsed, &from, &to).unwrap_err();
        assert_eq!(err, RouteError::unreachable(&from, &to));
    }

    #[test]
    fn empty_summary_means_zero_distance() {
        let parsed: DirectionsResponse =
            serde_json::from_str(r#"{"features": [{"properties": {"summary": {}}}]}"#).expect("payload");
        let (from, to) = ends();
        assert_eq!(parse_directions_response(parsed, &from, &to), Ok(0.0));
    }

    #[test]
    fn coordinates_are_sent_lng_first() {
        let (from, _) = ends();
        assert_eq!(lng_lat(&from), "77.216700,28.631500");
    }

    #[test]
    fn missing_api_key_is_a_build_error() {
        let config = RouterConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        if std::env::var(fare_core::config::OPENROUTE_API_KEY_ENV).is_err() {
            assert!(matches!(
                OpenRouteServiceRouter::new(&config),
                Err(AdapterError::MissingApiKey)
            ));
        }
    }
}
