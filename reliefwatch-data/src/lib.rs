//! Gateways to the external location and report services.
//!
//! Responsibilities:
//! - Resolve coordinates to a country name via Nominatim reverse geocoding.
//! - Fetch raw situation reports for a country from the ReliefWeb API.
//! - Convert wire payloads into `reliefwatch-core` records.
//!
//! Boundaries:
//! - Do not encode classification rules (live in `reliefwatch-core`).
//! - Fail soft at the public surface: lookup errors become an absent
//!   country, transport errors become an empty report list. The `try_*`
//!   variants expose the underlying error for callers that want it.
//!
//! Invariants:
//! - No global mutable state; clients are cheap to clone and thread-safe.

#![forbid(unsafe_code)]

pub mod geocode;
pub mod reports;

mod http;

pub use geocode::{GeocodeError, NominatimClient, NominatimConfig};
pub use http::{ClientBuildError, DEFAULT_USER_AGENT};
pub use reports::{DEFAULT_REPORT_LIMIT, ReliefWebClient, ReliefWebConfig, ReportsError};
