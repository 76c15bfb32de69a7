use async_trait::async_trait;
use reqwest::Client;

use crate::error::HttpError;

use super::execution::execute_request_status;

/// Issues one GET and yields the response status.
///
/// Implementations must distinguish a request that could not be built
/// ([`HttpError::BuildRequestFailed`]) from one that failed on the wire, since
/// the two are counted in different buckets.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_status(&self, url: &str) -> Result<u16, HttpError>;
}

/// Production transport backed by a shared pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with default timeouts and no extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_status(&self, url: &str) -> Result<u16, HttpError> {
        let request =
            self.client
                .get(url)
                .build()
                .map_err(|err| HttpError::BuildRequestFailed {
                    url: url.to_owned(),
                    source: Box::new(err),
                })?;
        execute_request_status(&self.client, request).await
    }
}
