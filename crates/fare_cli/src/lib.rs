//! Library half of the `fare-split` binary: argument definitions, trip plan
//! parsing, the quote pipeline and ledger rendering.

pub mod app;
pub mod error;
pub mod quote;
pub mod report;
pub mod trip_plan;

pub use error::CliError;
