//! End-to-end behaviour of the scoring and aggregation pipeline.

use rstest::rstest;

use reliefwatch_core::{BatchAggregator, RawReport, ReportClassifier};

fn titled(title: &str) -> RawReport {
    RawReport {
        title: title.to_owned(),
        ..RawReport::default()
    }
}

#[rstest]
fn empty_batch_produces_empty_views() {
    let result = BatchAggregator::default().aggregate(&[]);

    assert!(result.all_reports.is_empty());
    assert!(result.disaster_reports.is_empty());
    assert_eq!(result.total_fetched, 0);
    assert_eq!(result.disasters_found, 0);
}

#[rstest]
fn keyword_match_qualifies_regardless_of_score() {
    let raw = titled("Severe flood in coastal district");

    let classification = ReportClassifier::default().classify(&raw);
    assert_eq!(classification.report.matched_keywords, ["flood"]);
    assert!(classification.is_disaster);

    let result = BatchAggregator::default().aggregate(&[raw]);
    assert_eq!(result.disasters_found, 1);
}

#[rstest]
fn keyword_free_low_score_report_is_excluded() {
    let raw = titled("Quarterly budget review");

    let classification = ReportClassifier::default().classify(&raw);
    assert!(classification.report.matched_keywords.is_empty());
    assert!(classification.report.score < 0.08);
    assert!(!classification.is_disaster);
    assert!(!classification.report.has_disaster_tag);

    let result = BatchAggregator::default().aggregate(&[raw]);
    assert_eq!(result.disasters_found, 0);
    assert_eq!(result.total_fetched, 1);
}

#[rstest]
fn equal_scores_preserve_input_order() {
    let mut first = titled("Severe flood in coastal district");
    first.url = Some("https://example.org/first".to_owned());
    let mut second = titled("Severe flood in coastal district");
    second.url = Some("https://example.org/second".to_owned());

    let result = BatchAggregator::default().aggregate(&[first, second]);

    assert_eq!(result.disasters_found, 2);
    let urls: Vec<Option<&str>> = result
        .disaster_reports
        .iter()
        .map(|report| report.url.as_deref())
        .collect();
    assert_eq!(
        urls,
        [
            Some("https://example.org/first"),
            Some("https://example.org/second"),
        ]
    );
}

#[rstest]
fn tagged_report_with_unrelated_text_is_still_included() {
    let mut raw = titled("Quarterly budget review");
    raw.disaster_tags = vec!["Flood".to_owned()];

    let result = BatchAggregator::default().aggregate(&[raw]);

    assert_eq!(result.disasters_found, 1);
    let report = result.disaster_reports.first().expect("one report");
    assert!(report.has_disaster_tag);
    assert!(report.matched_keywords.is_empty());
    assert!(report.score < 0.08);
}

#[rstest]
fn mixed_batch_partitions_and_ranks() {
    let raws = vec![
        titled("Quarterly budget review"),
        titled("Severe flooding after the tropical storm"),
        titled("Flood"),
        titled("Road resurfacing schedule"),
    ];

    let result = BatchAggregator::default().aggregate(&raws);

    assert_eq!(result.total_fetched, 4);
    assert_eq!(result.disasters_found, 2);
    assert_eq!(
        result
            .disaster_reports
            .first()
            .map(|report| report.title.as_str()),
        Some("Severe flooding after the tropical storm")
    );

    // Input ordering of the full view is untouched by the ranking.
    assert_eq!(
        result
            .all_reports
            .iter()
            .map(|report| report.title.as_str())
            .collect::<Vec<_>>(),
        [
            "Quarterly budget review",
            "Severe flooding after the tropical storm",
            "Flood",
            "Road resurfacing schedule",
        ]
    );
}

#[rstest]
fn rescoring_a_batch_is_deterministic() {
    let raws = vec![
        titled("Severe flooding after the tropical storm"),
        titled("Earthquake relief operations continue"),
    ];

    let aggregator = BatchAggregator::default();
    assert_eq!(aggregator.aggregate(&raws), aggregator.aggregate(&raws));
}
