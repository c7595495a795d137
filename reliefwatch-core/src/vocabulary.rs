//! Fixed vocabulary of disaster-related terms and phrases.
//!
//! The vocabulary is ordered: lexical matches are reported in vocabulary
//! order, and the lexical fraction divides by the vocabulary length. It is
//! constructed once at startup and never mutated; the scorer, classifier,
//! and aggregator all borrow it through shared ownership of their parents.

use thiserror::Error;

/// Disaster terms matched against report text, in match-report order.
const DISASTER_TERMS: &[&str] = &[
    "flood",
    "flooding",
    "hurricane",
    "cyclone",
    "typhoon",
    "earthquake",
    "tsunami",
    "drought",
    "wildfire",
    "storm",
    "tornado",
    "landslide",
    "avalanche",
    "heatwave",
    "cold wave",
    "blizzard",
    "volcanic eruption",
    "heavy rain",
    "monsoon",
    "extreme weather",
    "disaster",
    "emergency",
    "evacuation",
    "relief",
    "crisis",
    "severe weather",
    "tropical storm",
];

/// Errors returned by [`Vocabulary::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// No terms were supplied.
    #[error("vocabulary must contain at least one term")]
    Empty,
    /// A term was empty or whitespace-only.
    #[error("vocabulary terms must not be blank")]
    BlankTerm,
}

/// Fixed, ordered set of disaster-related terms and phrases.
///
/// Terms are stored lower-cased so they can be matched as literal
/// substrings of lower-cased report text.
///
/// # Examples
///
/// ```
/// use reliefwatch_core::Vocabulary;
///
/// let vocabulary = Vocabulary::default();
/// assert!(vocabulary.terms().iter().any(|t| t == "flood"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Validates and constructs a [`Vocabulary`] from custom terms.
    ///
    /// Terms are normalised to lower case; their relative order is
    /// preserved.
    ///
    /// # Errors
    /// Returns [`VocabularyError::Empty`] when no terms are supplied and
    /// [`VocabularyError::BlankTerm`] when any term is blank.
    pub fn new<I, S>(terms: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalised: Vec<String> = terms
            .into_iter()
            .map(|term| term.into().to_lowercase())
            .collect();
        if normalised.is_empty() {
            return Err(VocabularyError::Empty);
        }
        if normalised.iter().any(|term| term.trim().is_empty()) {
            return Err(VocabularyError::BlankTerm);
        }
        Ok(Self { terms: normalised })
    }

    /// Terms in vocabulary order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary holds no terms.
    ///
    /// Always `false` for validated instances; present for API symmetry
    /// with [`Vocabulary::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The synthetic document used as the reference side of the similarity
    /// model: all terms joined by single spaces.
    #[must_use]
    pub fn synthetic_document(&self) -> String {
        self.terms.join(" ")
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            terms: DISASTER_TERMS.iter().map(|&term| term.to_owned()).collect(),
        }
    }
}
