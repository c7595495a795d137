//! Relevance scoring for a single piece of report text.
//!
//! [`RelevanceScorer`] combines two signals over lower-cased text: the
//! fraction of vocabulary terms present as literal substrings, and the
//! cosine similarity between TF-IDF vectors of the vocabulary's synthetic
//! document and the text. Scoring is a pure function of the text and the
//! vocabulary; the similarity model is refitted on every call so results
//! never depend on previously scored reports.

use crate::tfidf;
use crate::vocabulary::Vocabulary;

/// Signals produced by scoring one piece of text.
///
/// All values are deterministic for a given `(text, vocabulary)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceSignals {
    /// Cosine similarity between the vocabulary document and the text,
    /// in `0.0..=1.0`. Defaults to `0.0` when the similarity fit is
    /// degenerate.
    pub similarity: f64,
    /// Fraction of vocabulary terms matched, in `0.0..=1.0`.
    pub lexical_fraction: f64,
    /// Every vocabulary term found as a substring of the lower-cased text,
    /// in vocabulary order and untruncated.
    pub matched_keywords: Vec<String>,
}

impl RelevanceSignals {
    fn empty() -> Self {
        Self {
            similarity: 0.0,
            lexical_fraction: 0.0,
            matched_keywords: Vec::new(),
        }
    }
}

/// Scores report text against a fixed [`Vocabulary`].
///
/// # Examples
///
/// ```
/// use reliefwatch_core::{RelevanceScorer, Vocabulary};
///
/// let scorer = RelevanceScorer::new(Vocabulary::default());
/// let signals = scorer.score("Severe flood in coastal district");
/// assert_eq!(signals.matched_keywords, ["flood"]);
/// assert!(signals.lexical_fraction > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    vocabulary: Vocabulary,
}

impl RelevanceScorer {
    /// Create a scorer over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this scorer matches against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Score arbitrary text.
    ///
    /// Empty text short-circuits to all-zero signals without attempting
    /// vectorisation. A degenerate similarity fit (for example text that
    /// leaves no terms after stop-word removal) falls back to a similarity
    /// of `0.0` while the lexical signal is still reported.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the lexical fraction divides two small term counts"
    )]
    pub fn score(&self, text: &str) -> RelevanceSignals {
        if text.is_empty() {
            return RelevanceSignals::empty();
        }

        let lowered = text.to_lowercase();
        let matched_keywords: Vec<String> = self
            .vocabulary
            .terms()
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .cloned()
            .collect();
        let lexical_fraction = matched_keywords.len() as f64 / self.vocabulary.len() as f64;

        let similarity = tfidf::cosine_similarity(&self.vocabulary.synthetic_document(), &lowered)
            .unwrap_or(0.0);

        RelevanceSignals {
            similarity,
            lexical_fraction,
            matched_keywords,
        }
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}
