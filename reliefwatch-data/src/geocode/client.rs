//! HTTP client for Nominatim reverse geocoding.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::response::ReverseResponse;
use crate::http::{self, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default Nominatim endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for [`NominatimClient`].
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL of the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests. Nominatim's usage policy requires
    /// an identifying agent.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Errors raised while resolving a coordinate pair.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The configured base URL could not be parsed.
    #[error("invalid Nominatim base URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        /// Configured base URL.
        base_url: String,
        /// Source error from `url`.
        #[source]
        source: url::ParseError,
    },
    /// Sending the request failed.
    #[error("reverse geocoding request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Source error from `reqwest`.
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("reverse geocoding request to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body could not be decoded.
    #[error("failed to decode reverse geocoding response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Source error from `reqwest`.
        #[source]
        source: reqwest::Error,
    },
}

/// Reverse geocoding client over the Nominatim `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a client with default configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(NominatimConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ClientBuildError> {
        let client = http::build_client(&config.user_agent, config.timeout)?;
        Ok(Self { client, config })
    }

    /// Resolve a coordinate pair to a country name, failing soft.
    ///
    /// Any lookup error is logged at warn level and reported as `None`;
    /// callers treat absence as ordinary data.
    pub async fn resolve_country(&self, latitude: f64, longitude: f64) -> Option<String> {
        match self.try_resolve_country(latitude, longitude).await {
            Ok(country) => country,
            Err(error) => {
                log::warn!("reverse geocoding failed for ({latitude}, {longitude}): {error}");
                None
            }
        }
    }

    /// Resolve a coordinate pair to a country name.
    ///
    /// `Ok(None)` means the lookup succeeded but the coordinate does not
    /// lie in a country (for example open sea).
    ///
    /// # Errors
    /// Returns [`GeocodeError`] on configuration, transport, status, or
    /// decoding failures.
    pub async fn try_resolve_country(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, GeocodeError> {
        let url = self.reverse_url(latitude, longitude)?;
        let requested = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| GeocodeError::Request {
                url: requested.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                url: requested,
                status: status.as_u16(),
            });
        }

        let decoded: ReverseResponse =
            response
                .json()
                .await
                .map_err(|source| GeocodeError::Decode {
                    url: requested,
                    source,
                })?;
        Ok(decoded.into_country())
    }

    /// Build the `/reverse` URL for the given coordinates.
    fn reverse_url(&self, latitude: f64, longitude: f64) -> Result<Url, GeocodeError> {
        let base = format!("{}/reverse", self.config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|source| GeocodeError::InvalidBaseUrl {
            base_url: self.config.base_url.clone(),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("accept-language", "en");
        Ok(url)
    }
}
