//! HTTP transport used by the dispatcher.
mod execution;
mod transport;

#[cfg(test)]
mod tests;

pub use transport::{ReqwestTransport, Transport};
