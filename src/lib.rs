//! Core library for the `stress-test` CLI.
//!
//! The binary is a thin shell around two pieces exposed here: the
//! [`dispatch::Dispatcher`], which issues a fixed number of GET requests with
//! bounded concurrency, and the [`metrics::Aggregator`], which every request
//! reports its single outcome into. The [`http::Transport`] trait is the seam
//! between the dispatcher and the network.
pub mod args;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
