//! Command-line error surface.

use reliefwatch_data::{ClientBuildError, GeocodeError, ReportsError};
use thiserror::Error;

/// Failures surfaced to the terminal with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// A gateway HTTP client could not be constructed.
    #[error("failed to build gateway client: {source}")]
    Client {
        #[from]
        source: ClientBuildError,
    },
    /// Reverse geocoding failed outright.
    #[error("reverse geocoding failed: {source}")]
    Geocode {
        #[from]
        source: GeocodeError,
    },
    /// The coordinates resolved to no country.
    #[error("could not determine country for {latitude}, {longitude}")]
    UnknownCountry {
        /// Latitude that failed to resolve.
        latitude: f64,
        /// Longitude that failed to resolve.
        longitude: f64,
    },
    /// Fetching reports from ReliefWeb failed.
    #[error("fetching reports failed: {source}")]
    Reports {
        #[from]
        source: ReportsError,
    },
    /// The result could not be encoded as JSON.
    #[error("encoding output failed: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
    /// The async runtime could not be started.
    #[error("runtime error: {source}")]
    Runtime {
        #[from]
        source: std::io::Error,
    },
}
