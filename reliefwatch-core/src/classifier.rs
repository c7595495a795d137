//! Per-report disaster classification.
//!
//! The classifier combines the scorer's similarity and lexical signals
//! into one confidence value, applies the disaster predicate, and copies
//! the display fields into a [`ScoredReport`]. Structured tag evidence is
//! computed independently of the score: it never changes the confidence,
//! only the aggregator's inclusion decision.

use crate::report::{RawReport, ScoredReport};
use crate::scorer::RelevanceScorer;
use crate::vocabulary::Vocabulary;

/// Weight of the TF-IDF similarity signal in the combined score.
const SIMILARITY_WEIGHT: f64 = 0.6;

/// Weight of the lexical match fraction in the combined score.
const LEXICAL_WEIGHT: f64 = 0.4;

/// Score at or above which a report qualifies as a disaster on the
/// numeric signal alone. A single keyword match also qualifies a report
/// outright, so this gate only decides keyword-free reports.
const SCORE_THRESHOLD: f64 = 0.08;

/// Maximum number of matched keywords copied into a [`ScoredReport`].
const MAX_REPORTED_KEYWORDS: usize = 5;

/// Outcome of classifying one raw report.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The normalised report record with its confidence.
    pub report: ScoredReport,
    /// Text-based disaster verdict. Structured tags are deliberately not
    /// part of this flag; see [`ScoredReport::has_disaster_tag`].
    pub is_disaster: bool,
}

/// Classifies raw reports using a [`RelevanceScorer`].
///
/// # Examples
///
/// ```
/// use reliefwatch_core::{RawReport, ReportClassifier};
///
/// let classifier = ReportClassifier::default();
/// let raw = RawReport {
///     title: "Severe flood in coastal district".to_owned(),
///     ..RawReport::default()
/// };
/// let classification = classifier.classify(&raw);
/// assert!(classification.is_disaster);
/// assert_eq!(classification.report.matched_keywords, ["flood"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportClassifier {
    scorer: RelevanceScorer,
}

impl ReportClassifier {
    /// Create a classifier around an existing scorer.
    #[must_use]
    pub fn new(scorer: RelevanceScorer) -> Self {
        Self { scorer }
    }

    /// Create a classifier over a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::new(RelevanceScorer::new(vocabulary))
    }

    /// The scorer backing this classifier.
    #[must_use]
    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Classify one raw report.
    ///
    /// The scored text is `title + " " + body` with missing fields treated
    /// as empty strings. Classification never fails: malformed or missing
    /// fields degrade to defaults and the report is still scored.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the confidence is a weighted sum of the two signals"
    )]
    pub fn classify(&self, raw: &RawReport) -> Classification {
        let text = format!("{} {}", raw.title, raw.body);
        let signals = self.scorer.score(&text);

        let score = round_to_3dp(
            signals.similarity * SIMILARITY_WEIGHT + signals.lexical_fraction * LEXICAL_WEIGHT,
        );
        let is_disaster = score >= SCORE_THRESHOLD || !signals.matched_keywords.is_empty();
        let has_disaster_tag =
            !raw.disaster_tags.is_empty() || !raw.disaster_type_tags.is_empty();

        let mut matched_keywords = signals.matched_keywords;
        matched_keywords.truncate(MAX_REPORTED_KEYWORDS);

        Classification {
            report: ScoredReport {
                title: raw.title.clone(),
                date: raw.created_date.clone(),
                country: raw.primary_country.clone(),
                disaster_types: raw.disaster_type_tags.clone(),
                url: raw.url.clone(),
                score,
                matched_keywords,
                has_disaster_tag,
            },
            is_disaster,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales to thousandths and back"
)]
fn round_to_3dp(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
