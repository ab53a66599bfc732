//! Error taxonomy for the allocation engine.
//!
//! Business rejections (`RosterFull`, `DegenerateRoute`, `UnresolvableAddress`,
//! `MissingPassengerName`) and surfaced failures (`InvalidVehicleConfig`, `CollaboratorUnavailable`)
//! share one enum so callers can match on a single type and display the
//! message verbatim.

use std::fmt;

use thiserror::Error;

use crate::collaborators::{GeocodeError, RouteError};

/// External service an allocation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Geocoder,
    Router,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::Geocoder => f.write_str("geocoder"),
            Collaborator::Router => f.write_str("router"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FareError {
    #[error("you can only add a maximum of {max} passengers")]
    RosterFull { max: usize },

    #[error("pickup and drop locations cannot be the same ('{address}')")]
    DegenerateRoute { address: String },

    #[error("failed to resolve coordinates for address '{address}'")]
    UnresolvableAddress { address: String },

    #[error("passenger name is required")]
    MissingPassengerName,

    #[error("invalid vehicle configuration: {0}")]
    InvalidVehicleConfig(String),

    #[error("{collaborator} unavailable: {message}")]
    CollaboratorUnavailable {
        collaborator: Collaborator,
        message: String,
    },
}

impl FareError {
    /// True for expected business conditions, false for failures that should
    /// be surfaced as errors.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            FareError::RosterFull { .. }
                | FareError::DegenerateRoute { .. }
                | FareError::UnresolvableAddress { .. }
                | FareError::MissingPassengerName
        )
    }

    pub(crate) fn router(message: impl Into<String>) -> Self {
        FareError::CollaboratorUnavailable {
            collaborator: Collaborator::Router,
            message: message.into(),
        }
    }
}

impl From<GeocodeError> for FareError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound(address) => FareError::UnresolvableAddress { address },
            GeocodeError::Unavailable(message) => FareError::CollaboratorUnavailable {
                collaborator: Collaborator::Geocoder,
                message,
            },
        }
    }
}

impl From<RouteError> for FareError {
    fn from(err: RouteError) -> Self {
        FareError::router(err.to_string())
    }
}

/// Shorthand result type for the engine.
pub type FareResult<T> = Result<T, FareError>;
