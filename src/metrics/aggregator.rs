use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::{RequestOutcome, RunReport};

/// Per-run sink that every request task reports into exactly once.
///
/// Scalar counters are atomics; status codes live behind a mutex since the
/// key set is only known at runtime. Reading the result through
/// [`Aggregator::snapshot`] is only meaningful once every reporting task has
/// been joined.
#[derive(Debug)]
pub struct Aggregator {
    total_requests: u64,
    success: AtomicU64,
    connection_errors: AtomicU64,
    construction_errors: AtomicU64,
    status_codes: Mutex<BTreeMap<u16, u64>>,
}

impl Aggregator {
    #[must_use]
    pub const fn new(total_requests: u64) -> Self {
        Self {
            total_requests,
            success: AtomicU64::new(0),
            connection_errors: AtomicU64::new(0),
            construction_errors: AtomicU64::new(0),
            status_codes: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn report(&self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success => {
                self.success.fetch_add(1, Ordering::Relaxed);
            }
            RequestOutcome::HttpError(status) => {
                let mut codes = self
                    .status_codes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                let count = codes.entry(status).or_insert(0);
                *count = count.saturating_add(1);
            }
            RequestOutcome::ConnectionError => {
                self.connection_errors.fetch_add(1, Ordering::Relaxed);
            }
            RequestOutcome::ConstructionError => {
                self.construction_errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self, elapsed: Duration) -> RunReport {
        let status_code_counts = self
            .status_codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        RunReport {
            total_requests: self.total_requests,
            success_count: self.success.load(Ordering::Acquire),
            status_code_counts,
            connection_error_count: self.connection_errors.load(Ordering::Acquire),
            construction_error_count: self.construction_errors.load(Ordering::Acquire),
            elapsed,
        }
    }
}
