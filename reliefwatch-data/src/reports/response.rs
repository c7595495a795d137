//! ReliefWeb reports API response types.
//!
//! Models the `/v2/reports` envelope down to the fields the pipeline
//! consumes. Every field defaults when absent so partial payloads decode
//! into degraded-but-usable reports instead of failing the batch.
//!
//! See: <https://apidoc.reliefweb.int/>

use reliefwatch_core::RawReport;
use serde::Deserialize;

/// Top level of a `/v2/reports` response.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportsResponse {
    /// Total number of reports matching the query, across all pages.
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
    /// Reports in this page.
    #[serde(default)]
    pub data: Vec<ReportEntry>,
}

/// One report entry in the response.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ReportEntry {
    /// Field payload of the entry.
    #[serde(default)]
    pub fields: ReportFields,
}

/// Field payload of a report entry.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ReportFields {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    disaster: Vec<NamedField>,
    #[serde(default)]
    disaster_type: Vec<NamedField>,
    #[serde(default)]
    primary_country: Option<NamedField>,
    #[serde(default)]
    date: Option<DateField>,
    #[serde(default)]
    url: Option<String>,
}

/// A `{ "name": ... }` reference used for tags and countries.
#[derive(Debug, Deserialize, Default)]
struct NamedField {
    #[serde(default)]
    name: String,
}

/// Date envelope of a report.
#[derive(Debug, Deserialize, Default)]
struct DateField {
    #[serde(default)]
    created: Option<String>,
}

impl ReportFields {
    /// Convert the wire fields into the core's raw report record.
    pub(crate) fn into_raw_report(self) -> RawReport {
        RawReport {
            title: self.title,
            body: self.body,
            disaster_tags: self.disaster.into_iter().map(|tag| tag.name).collect(),
            disaster_type_tags: self
                .disaster_type
                .into_iter()
                .map(|tag| tag.name)
                .collect(),
            primary_country: self.primary_country.map(|country| country.name),
            created_date: self.date.and_then(|date| date.created),
            url: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ReportsResponse;

    #[rstest]
    fn deserialise_full_entry() {
        let json = r#"{
            "totalCount": 1234,
            "data": [{
                "id": "100",
                "fields": {
                    "title": "Severe flood in coastal district",
                    "body": "Evacuation is underway.",
                    "disaster": [{"name": "Bangladesh: Floods 2024"}],
                    "disaster_type": [{"name": "Flood"}, {"name": "Flash Flood"}],
                    "primary_country": {"name": "Bangladesh"},
                    "date": {"created": "2024-05-01T00:00:00+00:00"},
                    "url": "https://reliefweb.int/node/100"
                }
            }]
        }"#;

        let response: ReportsResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.total_count, 1234);
        let raw = response
            .data
            .into_iter()
            .next()
            .expect("one entry")
            .fields
            .into_raw_report();
        assert_eq!(raw.title, "Severe flood in coastal district");
        assert_eq!(raw.disaster_tags, ["Bangladesh: Floods 2024"]);
        assert_eq!(raw.disaster_type_tags, ["Flood", "Flash Flood"]);
        assert_eq!(raw.primary_country.as_deref(), Some("Bangladesh"));
        assert_eq!(raw.created_date.as_deref(), Some("2024-05-01T00:00:00+00:00"));
        assert_eq!(raw.url.as_deref(), Some("https://reliefweb.int/node/100"));
    }

    #[rstest]
    fn deserialise_sparse_entry_defaults_fields() {
        let json = r#"{
            "data": [{"fields": {"title": "Flood update"}}]
        }"#;

        let response: ReportsResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.total_count, 0);
        let raw = response
            .data
            .into_iter()
            .next()
            .expect("one entry")
            .fields
            .into_raw_report();
        assert_eq!(raw.title, "Flood update");
        assert_eq!(raw.body, "");
        assert!(raw.disaster_tags.is_empty());
        assert!(raw.disaster_type_tags.is_empty());
        assert!(raw.primary_country.is_none());
        assert!(raw.created_date.is_none());
        assert!(raw.url.is_none());
    }

    #[rstest]
    fn deserialise_empty_response() {
        let response: ReportsResponse =
            serde_json::from_str(r#"{"totalCount": 0, "data": []}"#).expect("should deserialise");

        assert!(response.data.is_empty());
    }

    #[rstest]
    fn deserialise_entry_without_fields() {
        let json = r#"{"data": [{"id": "7"}]}"#;

        let response: ReportsResponse = serde_json::from_str(json).expect("should deserialise");

        let raw = response
            .data
            .into_iter()
            .next()
            .expect("one entry")
            .fields
            .into_raw_report();
        assert_eq!(raw, reliefwatch_core::RawReport::default());
    }
}
