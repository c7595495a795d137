//! HTTP handlers for the dashboard and the scoring endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use reliefwatch_core::{AggregationResult, BatchAggregator, ScoredReport};
use reliefwatch_data::{DEFAULT_REPORT_LIMIT, NominatimClient, ReliefWebClient};
use serde::{Deserialize, Serialize};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reverse-geocoding client.
    pub geocoder: NominatimClient,
    /// ReliefWeb reports client.
    pub reports: ReliefWebClient,
    /// Scoring pipeline.
    pub aggregator: BatchAggregator,
}

/// Body of a `POST /api/check` request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Response payload for `POST /api/check`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The coordinates could not be resolved to a country.
    Error {
        /// Human-readable failure description.
        error: String,
    },
    /// Scored reports for the resolved country.
    Summary {
        /// Country the coordinates resolved to.
        country: String,
        /// Number of reports fetched from ReliefWeb.
        total_fetched: usize,
        /// Number of reports classified as disaster-relevant.
        disasters_found: usize,
        /// Every fetched report, scored.
        all_reports: Vec<ScoredReport>,
        /// Disaster-relevant reports, highest score first.
        disaster_reports: Vec<ScoredReport>,
    },
}

impl CheckResponse {
    fn from_aggregation(country: String, result: AggregationResult) -> Self {
        Self::Summary {
            country,
            total_fetched: result.total_fetched,
            disasters_found: result.disasters_found,
            all_reports: result.all_reports,
            disaster_reports: result.disaster_reports,
        }
    }
}

/// Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Resolve coordinates to a country, fetch its reports, and score them.
///
/// Gateway failures degrade rather than error: an unresolvable location
/// yields an `error` payload and a failed fetch scores an empty batch.
pub async fn check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Json<CheckResponse> {
    let Some(country) = state
        .geocoder
        .resolve_country(request.latitude, request.longitude)
        .await
    else {
        return Json(CheckResponse::Error {
            error: "Could not determine country".to_owned(),
        });
    };

    tracing::info!(country = %country, "scoring reports");
    let raw = state.reports.fetch_reports(&country, DEFAULT_REPORT_LIMIT).await;
    let result = state.aggregator.aggregate(&raw);
    Json(CheckResponse::from_aggregation(country, result))
}

#[cfg(test)]
mod tests {
    use reliefwatch_core::AggregationResult;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{CheckRequest, CheckResponse};

    #[rstest]
    fn error_payload_uses_wire_shape() {
        let response = CheckResponse::Error {
            error: "Could not determine country".to_owned(),
        };
        let value = serde_json::to_value(&response).expect("serialises");
        assert_eq!(value, json!({"error": "Could not determine country"}));
    }

    #[rstest]
    fn summary_payload_uses_wire_shape() {
        let response =
            CheckResponse::from_aggregation("Chile".to_owned(), AggregationResult::default());
        let value = serde_json::to_value(&response).expect("serialises");
        assert_eq!(
            value,
            json!({
                "country": "Chile",
                "total_fetched": 0,
                "disasters_found": 0,
                "all_reports": [],
                "disaster_reports": [],
            })
        );
    }

    #[rstest]
    fn request_decodes_coordinates() {
        let raw: Value = json!({"latitude": 23.8103, "longitude": 90.4125});
        let request: CheckRequest = serde_json::from_value(raw).expect("decodes");
        assert!((request.latitude - 23.8103).abs() < f64::EPSILON);
        assert!((request.longitude - 90.4125).abs() < f64::EPSILON);
    }
}
