//! Situation report fetching via the ReliefWeb API.
//!
//! [`ReliefWebClient`] queries the `/v2/reports` endpoint for a country
//! and converts the response envelope into [`reliefwatch_core::RawReport`]
//! records. The public [`ReliefWebClient::fetch_reports`] surface fails
//! soft: any transport, status, or decoding problem is logged and
//! reported as an empty batch, which the pipeline aggregates into a
//! zero-report result rather than an error.
//!
//! # Example
//!
//! ```no_run
//! use reliefwatch_data::{DEFAULT_REPORT_LIMIT, ReliefWebClient, ReliefWebConfig};
//!
//! # async fn example() -> Result<(), reliefwatch_data::ClientBuildError> {
//! let client = ReliefWebClient::with_config(
//!     ReliefWebConfig::default().with_appname("my-app-id"),
//! )?;
//! let reports = client.fetch_reports("Bangladesh", DEFAULT_REPORT_LIMIT).await;
//! # let _ = reports;
//! # Ok(())
//! # }
//! ```

mod client;
mod response;

pub use client::{DEFAULT_REPORT_LIMIT, ReliefWebClient, ReliefWebConfig, ReportsError};
