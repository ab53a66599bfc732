//! Fuel cost allocation for a shared car trip.
//!
//! A driver publishes a main [`Route`](model::Route) and a
//! [`Vehicle`](model::Vehicle); up to three co-riders join with their own
//! pickup/drop legs. Each rider's contribution is priced once, at insertion
//! time, and the [`ledger`] reconciles driver vs. rider shares on demand.
//!
//! - [`overlap`]: bounding-box overlap heuristic between two legs
//! - [`pricing`]: distance + vehicle economics to fuel cost
//! - [`allocation`]: one candidate's capped share
//! - [`ledger`]: pure projection of totals, driver share and savings
//! - [`session`]: caller-owned trip state tying the above together
//!
//! Geocoding and routing are external collaborators reached through the
//! traits in [`collaborators`]; concrete HTTP clients live in `fare_adapters`.

pub mod allocation;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod overlap;
pub mod pricing;
pub mod session;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::{Collaborator, FareError, FareResult};
