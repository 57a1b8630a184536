use std::time::{Duration, Instant};

use reqwest::Client;

use super::prelude::*;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for a check.
/// Without a timeout the client waits for the server indefinitely. Proxy environment
/// variables are ignored, the request always goes straight to the target.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, CheckError> {
    let mut builder = Client::builder().user_agent(USER_AGENT).no_proxy();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Send the GET request and read the body to its end, returning the status code.
async fn fetch_status(client: &Client, url: &str) -> Result<u16, CheckError> {
    let mut response = client.get(url).send().await?;
    let status = response.status().as_u16();
    tracing::debug!(url, status, version = ?response.version(), "received response headers");

    let mut body_len = 0usize;
    while let Some(chunk) = response.chunk().await? {
        body_len += chunk.len();
    }
    tracing::trace!(url, body_len, "response body drained");

    Ok(status)
}

/// Perform one check of `url` with an existing client.
///
/// Connection failures and timeouts produce a result without a status code. Any other failure
/// is returned as [`CheckError::Other`].
pub async fn check_url(client: &Client, url: &str) -> Result<RequestResult, CheckError> {
    let start = Instant::now();
    let outcome = fetch_status(client, url).await;
    let response_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let response_code = match outcome {
        Ok(status) => Some(status),
        Err(err @ (CheckError::ConnectionFailure { .. } | CheckError::TimeoutExpired { .. })) => {
            tracing::info!(url, error = %err, "check failed without a response");
            None
        }
        Err(err @ CheckError::Other { .. }) => return Err(err),
    };

    Ok(RequestResult {
        url: url.to_string(),
        response_code,
        response_time_ms,
    })
}

/// Perform one check of `url`, aborting the request after `timeout` when given.
pub async fn check(url: &str, timeout: Option<Duration>) -> Result<RequestResult, CheckError> {
    let client = build_client(timeout)?;
    check_url(&client, url).await
}
