use fare_core::FareError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ride not found: {0}")]
    RideNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Fare(#[from] FareError),

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
