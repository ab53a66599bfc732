//! Runtime configuration for the collaborators and the default vehicle.
//!
//! Every section has defaults, so an empty TOML document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Vehicle;

/// Environment variable consulted when no router API key is configured.
pub const OPENROUTE_API_KEY_ENV: &str = "OPENROUTE_API_KEY";

const DEFAULT_NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_OPENROUTE_ENDPOINT: &str = "https://api.openrouteservice.org";
const DEFAULT_USER_AGENT: &str = "fare-split/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CACHE_CAPACITY: usize = 1_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    pub geocoder: GeocoderConfig,
    pub router: RouterConfig,
    pub vehicle: Vehicle,
}

impl FareConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Nominatim base URL (e.g. `https://nominatim.openstreetmap.org`).
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_NOMINATIM_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Which routing backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterKind {
    /// OpenRouteService directions API.
    #[default]
    OpenRouteService,
    /// Great-circle distance times `detour_factor`; no network.
    StraightLine,
    /// Distance table loaded from `table_path`.
    Precomputed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub kind: RouterKind,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    /// 0 disables caching.
    pub cache_capacity: usize,
    pub detour_factor: f64,
    pub table_path: Option<String>,
}

impl RouterConfig {
    /// The configured key, falling back to [`OPENROUTE_API_KEY_ENV`].
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(OPENROUTE_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            kind: RouterKind::default(),
            endpoint: DEFAULT_OPENROUTE_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            detour_factor: 1.0,
            table_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = FareConfig::from_toml_str("").expect("parses");
        assert_eq!(config, FareConfig::default());
        assert_eq!(config.vehicle, Vehicle::new(13.0, 100.0));
        assert_eq!(config.router.kind, RouterKind::OpenRouteService);
    }

    #[test]
    fn sections_override_individual_fields() {
        let config = FareConfig::from_toml_str(
            r#"
            [router]
            kind = "straight_line"
            detour_factor = 1.3

            [vehicle]
            average_mileage = 18.5
            fuel_price = 104.0
            "#,
        )
        .expect("parses");

        assert_eq!(config.router.kind, RouterKind::StraightLine);
        assert_eq!(config.router.detour_factor, 1.3);
        assert_eq!(config.router.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.vehicle, Vehicle::new(18.5, 104.0));
        assert_eq!(config.geocoder, GeocoderConfig::default());
    }

    #[test]
    fn unknown_router_kind_is_a_parse_error() {
        let err = FareConfig::from_toml_str("[router]\nkind = \"teleport\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn configured_api_key_wins_over_environment() {
        let config = RouterConfig {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("from-file"));
    }
}
