//! Facade crate for the reliefwatch disaster report engine.
//!
//! This crate re-exports the core relevance pipeline and exposes the
//! report/geocoding gateway behind a feature flag.

#![forbid(unsafe_code)]

pub use reliefwatch_core::{
    AggregationResult, BatchAggregator, Classification, RawReport, RelevanceScorer,
    RelevanceSignals, ReportClassifier, ScoredReport, Vocabulary, VocabularyError,
};

#[cfg(feature = "gateway")]
pub use reliefwatch_data::{
    ClientBuildError, NominatimClient, NominatimConfig, ReliefWebClient, ReliefWebConfig,
};
