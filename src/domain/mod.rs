//! Run-level domain types shared by the dispatcher and the CLI shell.
pub mod run;
