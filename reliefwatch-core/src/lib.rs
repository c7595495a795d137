//! Core relevance pipeline for the reliefwatch engine.
//!
//! The crate turns raw situation reports into disaster/non-disaster
//! decisions with a numeric confidence, and aggregates a batch of such
//! decisions into ranked views. It is deliberately free of I/O: report
//! fetching and geocoding live in `reliefwatch-data`, and HTTP rendering in
//! `reliefwatch-server`.
//!
//! Components, leaves first:
//! - [`Vocabulary`]: the fixed, ordered set of disaster terms used for
//!   lexical matching.
//! - [`RelevanceScorer`]: lexical match fraction plus TF-IDF cosine
//!   similarity for a single piece of text.
//! - [`ReportClassifier`]: wraps the scorer with structured-tag evidence to
//!   produce a [`ScoredReport`] and a boolean verdict.
//! - [`BatchAggregator`]: runs the classifier over a batch, partitions the
//!   results, and ranks the disaster subset by score.
//!
//! Every component is a pure function over immutable inputs; re-scoring
//! identical input yields identical output.

#![forbid(unsafe_code)]

mod aggregator;
mod classifier;
mod report;
mod scorer;
mod tfidf;
mod vocabulary;

pub use aggregator::BatchAggregator;
pub use classifier::{Classification, ReportClassifier};
pub use report::{AggregationResult, RawReport, ScoredReport};
pub use scorer::{RelevanceScorer, RelevanceSignals};
pub use vocabulary::{Vocabulary, VocabularyError};
