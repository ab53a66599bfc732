//! Persistence for finalized rides and user feedback.
//!
//! Stores hold snapshots; they never run the allocator. Costs must be
//! computed by `fare_core` before a record reaches a store.

pub mod error;
pub mod feedback;
pub mod memory;
pub mod records;

pub use error::{StoreError, StoreResult};
pub use feedback::{FeedbackRecord, FeedbackStore, NewFeedback};
pub use memory::{InMemoryFeedbackStore, InMemoryRideStore};
pub use records::{NewPassenger, PassengerRecord, RideRecord, RideStore, VehicleUpdate};
