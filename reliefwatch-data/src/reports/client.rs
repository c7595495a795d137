//! HTTP client for the ReliefWeb reports API.

use std::time::Duration;

use reliefwatch_core::RawReport;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::response::ReportsResponse;
use crate::http::{self, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default ReliefWeb API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.reliefweb.int";

/// Default application identifier sent with every query, as required by
/// the ReliefWeb API terms.
const DEFAULT_APPNAME: &str = "reliefwatch-0.1";

/// Default maximum number of reports fetched per query.
pub const DEFAULT_REPORT_LIMIT: u32 = 100;

/// Configuration for [`ReliefWebClient`].
#[derive(Debug, Clone)]
pub struct ReliefWebConfig {
    /// Base URL of the ReliefWeb API.
    pub base_url: String,
    /// Application identifier appended to every query.
    pub appname: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ReliefWebConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            appname: DEFAULT_APPNAME.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ReliefWebConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the application identifier.
    #[must_use]
    pub fn with_appname(mut self, appname: impl Into<String>) -> Self {
        self.appname = appname.into();
        self
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

/// Errors raised while fetching reports.
#[derive(Debug, Error)]
pub enum ReportsError {
    /// The configured base URL could not be parsed.
    #[error("invalid ReliefWeb base URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        /// Configured base URL.
        base_url: String,
        /// Source error from `url`.
        #[source]
        source: url::ParseError,
    },
    /// Sending the request failed.
    #[error("report query to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Source error from `reqwest`.
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("report query to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body could not be decoded.
    #[error("failed to decode report response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Source error from `reqwest`.
        #[source]
        source: reqwest::Error,
    },
}

/// Client over the ReliefWeb `/v2/reports` endpoint.
#[derive(Debug, Clone)]
pub struct ReliefWebClient {
    client: Client,
    config: ReliefWebConfig,
}

impl ReliefWebClient {
    /// Create a client with default configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(ReliefWebConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: ReliefWebConfig) -> Result<Self, ClientBuildError> {
        let client = http::build_client(&config.user_agent, config.timeout)?;
        Ok(Self { client, config })
    }

    /// Fetch reports for a country, failing soft.
    ///
    /// Any transport, status, or decoding error is logged at warn level
    /// and reported as an empty batch; downstream aggregation then yields
    /// a zero-report result.
    pub async fn fetch_reports(&self, country: &str, limit: u32) -> Vec<RawReport> {
        match self.try_fetch_reports(country, limit).await {
            Ok(reports) => reports,
            Err(error) => {
                log::warn!("report fetch for {country:?} failed: {error}");
                Vec::new()
            }
        }
    }

    /// Fetch reports for a country.
    ///
    /// # Errors
    /// Returns [`ReportsError`] on configuration, transport, status, or
    /// decoding failures.
    pub async fn try_fetch_reports(
        &self,
        country: &str,
        limit: u32,
    ) -> Result<Vec<RawReport>, ReportsError> {
        let url = self.reports_url(country, limit)?;
        let requested = url.to_string();
        log::debug!("querying reports: {requested}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ReportsError::Request {
                url: requested.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportsError::Status {
                url: requested,
                status: status.as_u16(),
            });
        }

        let decoded: ReportsResponse =
            response
                .json()
                .await
                .map_err(|source| ReportsError::Decode {
                    url: requested,
                    source,
                })?;
        log::debug!(
            "fetched {} reports (total matching: {})",
            decoded.data.len(),
            decoded.total_count
        );

        Ok(decoded
            .data
            .into_iter()
            .map(|entry| entry.fields.into_raw_report())
            .collect())
    }

    /// Build the `/v2/reports` URL for the given country and limit.
    fn reports_url(&self, country: &str, limit: u32) -> Result<Url, ReportsError> {
        let base = format!("{}/v2/reports", self.config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|source| ReportsError::InvalidBaseUrl {
            base_url: self.config.base_url.clone(),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("appname", &self.config.appname)
            .append_pair("query[fields][]", "country")
            .append_pair("query[value]", country)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}
