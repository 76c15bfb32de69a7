//! Request dispatch: splits a run into bounded concurrent work and feeds the
//! aggregator.
mod batch;
mod dispatcher;


pub use batch::{BatchRanges, batch_ranges};
pub use dispatcher::Dispatcher;
