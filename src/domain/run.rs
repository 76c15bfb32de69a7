use std::num::{NonZeroU64, NonZeroUsize};
use std::sync::Arc;

use crate::args::{DispatchMode, TesterArgs};
use crate::error::ValidationError;

/// Validated, immutable inputs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    target_url: Arc<str>,
    total_requests: NonZeroU64,
    concurrency: NonZeroUsize,
    dispatch: DispatchMode,
}

impl RunConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is blank or either count is zero.
    pub fn new(
        target_url: &str,
        total_requests: u64,
        concurrency: usize,
        dispatch: DispatchMode,
    ) -> Result<Self, ValidationError> {
        let target_url = target_url.trim();
        if target_url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        let total_requests =
            NonZeroU64::new(total_requests).ok_or(ValidationError::ValueTooSmall { min: 1 })?;
        let concurrency =
            NonZeroUsize::new(concurrency).ok_or(ValidationError::ValueTooSmall { min: 1 })?;
        Ok(Self {
            target_url: Arc::from(target_url),
            total_requests,
            concurrency,
            dispatch,
        })
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn shared_target_url(&self) -> Arc<str> {
        Arc::clone(&self.target_url)
    }

    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.total_requests.get()
    }

    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency.get()
    }

    /// Concurrency expressed as a batch width over the `u64` request index space.
    #[must_use]
    pub fn batch_size(&self) -> NonZeroU64 {
        u64::try_from(self.concurrency.get())
            .ok()
            .and_then(NonZeroU64::new)
            .unwrap_or(NonZeroU64::MAX)
    }

    #[must_use]
    pub const fn dispatch(&self) -> DispatchMode {
        self.dispatch
    }
}

impl TryFrom<&TesterArgs> for RunConfig {
    type Error = ValidationError;

    fn try_from(args: &TesterArgs) -> Result<Self, Self::Error> {
        RunConfig::new(
            &args.url,
            args.requests.get(),
            args.concurrency.get(),
            args.dispatch,
        )
    }
}
