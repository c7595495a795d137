//! Report records flowing through the pipeline.
//!
//! [`RawReport`] is the immutable external input; [`ScoredReport`] and
//! [`AggregationResult`] are derived, created fresh per batch, and hold no
//! cross-request state. Serde derives live behind the crate's `serde`
//! feature and keep the wire names of the upstream reports API
//! (`keywords`, `has_disaster_tag`, `disaster_types`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw situation report as fetched from the reports gateway.
///
/// No uniqueness is assumed across a batch; duplicate reports are scored
/// independently. Missing optional fields degrade to their defaults rather
/// than rejecting the report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RawReport {
    /// Report headline.
    pub title: String,
    /// Report body text.
    pub body: String,
    /// Free-text disaster category names attached by the source.
    pub disaster_tags: Vec<String>,
    /// Disaster type names attached by the source.
    pub disaster_type_tags: Vec<String>,
    /// Name of the report's primary country, when known.
    pub primary_country: Option<String>,
    /// Opaque creation timestamp, passed through without parsing.
    pub created_date: Option<String>,
    /// Canonical URL of the report, when known.
    pub url: Option<String>,
}

/// A classified report with its relevance confidence.
///
/// `score` is deterministic given `(title, body)` and the fixed
/// vocabulary, and is rounded to three decimal places. `matched_keywords`
/// holds at most the first five matches, in vocabulary order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredReport {
    /// Report headline, copied from the raw report.
    pub title: String,
    /// Opaque creation timestamp, copied from the raw report.
    pub date: Option<String>,
    /// Primary country name, copied from the raw report.
    pub country: Option<String>,
    /// Display names of the source's disaster type tags.
    pub disaster_types: Vec<String>,
    /// Canonical URL, copied from the raw report.
    pub url: Option<String>,
    /// Combined relevance confidence in `0.0..=1.0`, rounded to three
    /// decimal places.
    pub score: f64,
    /// Vocabulary terms found in the text, truncated to the first five.
    #[cfg_attr(feature = "serde", serde(rename = "keywords"))]
    pub matched_keywords: Vec<String>,
    /// Whether the source attached any structured disaster tag.
    pub has_disaster_tag: bool,
}

/// Ranked views over a classified batch.
///
/// `all_reports` preserves input order one-to-one; `disaster_reports` is
/// the subset qualifying as disasters, sorted by score descending with
/// ties keeping their original relative order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregationResult {
    /// Every scored report, in input order.
    pub all_reports: Vec<ScoredReport>,
    /// Disaster subset, sorted by score descending (stable).
    pub disaster_reports: Vec<ScoredReport>,
    /// Number of reports scored; equals `all_reports.len()`.
    pub total_fetched: usize,
    /// Number of disaster reports; equals `disaster_reports.len()`.
    pub disasters_found: usize,
}
