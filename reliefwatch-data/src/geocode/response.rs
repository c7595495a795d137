//! Nominatim reverse geocoding response types.
//!
//! Only the address envelope is modelled; every field the pipeline does
//! not read is ignored. Missing fields decode to `None` so a sparse
//! response never fails deserialisation.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Reverse/>

use serde::Deserialize;

/// Top level of a Nominatim `/reverse` response.
#[derive(Debug, Deserialize)]
pub(crate) struct ReverseResponse {
    /// Structured address breakdown, present on successful lookups.
    pub address: Option<Address>,
}

/// Address breakdown within a reverse geocoding result.
#[derive(Debug, Deserialize)]
pub(crate) struct Address {
    /// English country name, when the coordinate resolves to one.
    pub country: Option<String>,
}

impl ReverseResponse {
    /// Extract the country name, if the response carries one.
    pub(crate) fn into_country(self) -> Option<String> {
        self.address.and_then(|address| address.country)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ReverseResponse;

    #[rstest]
    fn deserialise_successful_lookup() {
        let json = r#"{
            "place_id": 297829683,
            "address": {
                "city": "Dhaka",
                "country": "Bangladesh",
                "country_code": "bd"
            }
        }"#;

        let response: ReverseResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.into_country().as_deref(), Some("Bangladesh"));
    }

    #[rstest]
    fn deserialise_error_payload_without_address() {
        let json = r#"{"error": "Unable to geocode"}"#;

        let response: ReverseResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.into_country().is_none());
    }

    #[rstest]
    fn deserialise_address_without_country() {
        let json = r#"{"address": {"city": "International Waters"}}"#;

        let response: ReverseResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.into_country().is_none());
    }
}
