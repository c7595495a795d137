//! Shared HTTP client construction for the gateway clients.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// Default user agent for gateway requests.
pub const DEFAULT_USER_AGENT: &str = "reliefwatch-gateway/0.1";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for gateway client construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build a reqwest client with the gateway's timeout and user agent.
pub(crate) fn build_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Client, ClientBuildError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()?;
    Ok(client)
}
