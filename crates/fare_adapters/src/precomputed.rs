//! Routes from a distance table loaded at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use fare_core::collaborators::{RouteError, Router};
use fare_core::model::Location;
use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// One directional table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableEntry {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Lookup table keyed by `(from address, to address)`. Misses are unreachable.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedRouter {
    table: HashMap<(String, String), f64>,
}

impl PrecomputedRouter {
    /// Load a JSON array of [`RouteTableEntry`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| AdapterError::TableIo {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<RouteTableEntry> =
            serde_json::from_str(&data).map_err(|source| AdapterError::TableParse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = RouteTableEntry>) -> Self {
        let table = entries
            .into_iter()
            .map(|entry| ((entry.from, entry.to), entry.distance_km))
            .collect();
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Router for PrecomputedRouter {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        self.table
            .get(&(from.address.clone(), to.address.clone()))
            .copied()
            .ok_or_else(|| RouteError::unreachable(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_table_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"from": "Depot", "to": "Airport", "distanceKm": 41.5}}]"#
        )
        .expect("write table");

        let router = PrecomputedRouter::from_file(file.path()).expect("loads");
        assert_eq!(router.len(), 1);

        let depot = Location::new("Depot", 0.0, 0.0);
        let airport = Location::new("Airport", 1.0, 1.0);
        assert_eq!(router.distance_km(&depot, &airport).await, Ok(41.5));
        // Directional: the reverse trip is not in the table.
        assert!(router.distance_km(&airport, &depot).await.is_err());
    }

    #[test]
    fn malformed_table_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write table");
        assert!(matches!(
            PrecomputedRouter::from_file(file.path()),
            Err(AdapterError::TableParse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            PrecomputedRouter::from_file("/nonexistent/route_table.json"),
            Err(AdapterError::TableIo { .. })
        ));
    }
}
