use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::HttpError;

/// Status code counted as a successful request. Everything else, including
/// other 2xx codes, is bucketed per status.
pub const SUCCESS_STATUS: u16 = 200;

/// Classified result of one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    HttpError(u16),
    ConnectionError,
    ConstructionError,
}

impl RequestOutcome {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == SUCCESS_STATUS {
            RequestOutcome::Success
        } else {
            RequestOutcome::HttpError(status)
        }
    }

    #[must_use]
    pub const fn from_result(result: &Result<u16, HttpError>) -> Self {
        match result {
            Ok(status) => RequestOutcome::from_status(*status),
            Err(err) if err.is_construction() => RequestOutcome::ConstructionError,
            Err(_) => RequestOutcome::ConnectionError,
        }
    }
}

/// Frozen result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub total_requests: u64,
    pub success_count: u64,
    pub status_code_counts: BTreeMap<u16, u64>,
    pub connection_error_count: u64,
    pub construction_error_count: u64,
    pub elapsed: Duration,
}

impl RunReport {
    #[must_use]
    pub fn invalid_count(&self) -> u64 {
        self.status_code_counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Number of requests that reported any outcome.
    #[must_use]
    pub fn completed_count(&self) -> u64 {
        self.success_count
            .saturating_add(self.invalid_count())
            .saturating_add(self.connection_error_count)
            .saturating_add(self.construction_error_count)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.total_requests
    }
}
