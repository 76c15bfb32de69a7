//! Outcome classification and concurrent aggregation into a run report.
mod aggregator;
mod types;


pub use aggregator::Aggregator;
pub use types::{RequestOutcome, RunReport};
