//! Reverse geocoding via the Nominatim API.
//!
//! [`NominatimClient`] resolves a coordinate pair to a country name. The
//! public [`NominatimClient::resolve_country`] surface fails soft: any
//! transport, status, or decoding problem is logged and reported as an
//! absent country, matching the pipeline's treatment of lookup failures
//! as ordinary data.
//!
//! # Example
//!
//! ```no_run
//! use reliefwatch_data::{NominatimClient, NominatimConfig};
//!
//! # async fn example() -> Result<(), reliefwatch_data::ClientBuildError> {
//! let client = NominatimClient::with_config(
//!     NominatimConfig::default().with_user_agent("my-app/1.0"),
//! )?;
//! let country = client.resolve_country(23.8103, 90.4125).await;
//! # let _ = country;
//! # Ok(())
//! # }
//! ```

mod client;
mod response;

pub use client::{GeocodeError, NominatimClient, NominatimConfig};
