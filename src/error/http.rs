use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request for '{url}': {source}")]
    BuildRequestFailed {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("Request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl HttpError {
    /// True when the request never left the process because it could not be built.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, HttpError::BuildRequestFailed { .. })
    }
}
