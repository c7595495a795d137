//! Batch aggregation over classified reports.
//!
//! The aggregator is a pure transformation over already-fetched data:
//! no network, no filesystem, no shared mutable state. Reports are scored
//! independently, so the per-report step could run in parallel; the
//! implementation stays single-threaded and applies the stable ranking
//! sort only after every score is available.

use std::cmp::Ordering;

use crate::classifier::{Classification, ReportClassifier};
use crate::report::{AggregationResult, RawReport};
use crate::vocabulary::Vocabulary;

/// Runs the classifier over a batch and produces the ranked views.
///
/// Inclusion into the disaster subset is disjunctive: either the
/// text-based verdict or the source's own structured tagging qualifies a
/// report on its own.
///
/// # Examples
///
/// ```
/// use reliefwatch_core::{BatchAggregator, RawReport};
///
/// let aggregator = BatchAggregator::default();
/// let result = aggregator.aggregate(&[RawReport {
///     title: "Severe flood in coastal district".to_owned(),
///     ..RawReport::default()
/// }]);
/// assert_eq!(result.total_fetched, 1);
/// assert_eq!(result.disasters_found, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchAggregator {
    classifier: ReportClassifier,
}

impl BatchAggregator {
    /// Create an aggregator around an existing classifier.
    #[must_use]
    pub fn new(classifier: ReportClassifier) -> Self {
        Self { classifier }
    }

    /// Create an aggregator over a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::new(ReportClassifier::with_vocabulary(vocabulary))
    }

    /// The classifier backing this aggregator.
    #[must_use]
    pub fn classifier(&self) -> &ReportClassifier {
        &self.classifier
    }

    /// Classify a batch, partition it, and rank the disaster subset.
    ///
    /// `all_reports` preserves the input order one-to-one. The disaster
    /// subset is sorted by score descending; the sort is stable, so equal
    /// scores keep their original relative order.
    #[must_use]
    pub fn aggregate(&self, raws: &[RawReport]) -> AggregationResult {
        let mut all_reports = Vec::with_capacity(raws.len());
        let mut disaster_reports = Vec::new();

        for raw in raws {
            let Classification {
                report,
                is_disaster,
            } = self.classifier.classify(raw);
            if is_disaster || report.has_disaster_tag {
                disaster_reports.push(report.clone());
            }
            all_reports.push(report);
        }

        disaster_reports.sort_by(|lhs, rhs| {
            rhs.score
                .partial_cmp(&lhs.score)
                .unwrap_or(Ordering::Equal)
        });

        AggregationResult {
            total_fetched: all_reports.len(),
            disasters_found: disaster_reports.len(),
            all_reports,
            disaster_reports,
        }
    }
}
