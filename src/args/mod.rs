//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::TesterArgs;
pub use types::{DispatchMode, OutputFormat, PositiveU64, PositiveUsize};
