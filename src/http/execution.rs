use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Request};
use tracing::debug;

use crate::error::HttpError;

/// Bytes read past the status so a short body can hand its connection back to the pool.
const DRAIN_MAX_BYTES: usize = 64 * 1024;
/// Upper bound on time spent draining; streaming bodies are dropped once it passes.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn execute_request_status(
    client: &Client,
    request: Request,
) -> Result<u16, HttpError> {
    let url = request.url().to_string();
    let response = client
        .execute(request)
        .await
        .map_err(|err| HttpError::RequestFailed {
            url,
            source: Box::new(err),
        })?;
    let status = response.status().as_u16();
    // The status is final here; the body only matters for connection reuse.
    match tokio::time::timeout(DRAIN_TIMEOUT, drain_response_body(response, DRAIN_MAX_BYTES)).await
    {
        Ok(Ok(())) => {}
        Ok(Err(err)) => debug!("Failed to drain response body (status {}): {}", status, err),
        Err(_) => debug!("Response body still streaming after {:?}; closing", DRAIN_TIMEOUT),
    }
    Ok(status)
}

/// Reads until EOF or until `max_bytes` have been seen, then drops the response.
async fn drain_response_body(
    response: reqwest::Response,
    max_bytes: usize,
) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut seen: usize = 0;
    while let Some(chunk) = stream.next().await {
        seen = seen.saturating_add(chunk?.len());
        if seen >= max_bytes {
            break;
        }
    }
    Ok(())
}
