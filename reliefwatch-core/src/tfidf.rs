//! Per-call TF-IDF similarity over a two-document corpus.
//!
//! The similarity model is rebuilt from scratch on every scoring call: the
//! corpus is exactly two documents (the vocabulary's synthetic document and
//! the report text), so fitting is cheap and scoring stays independent of
//! any historical corpus. Tokenisation lowercases, splits on
//! non-word characters, discards single-character tokens, and removes
//! common English stop words. The vectoriser keeps at most
//! [`MAX_FEATURES`] terms, ranked by total corpus count with alphabetical
//! tie-break.
//!
//! Term weight is `tf * (ln((1 + n) / (1 + df)) + 1)` with `n = 2`
//! documents; vectors are L2-normalised, so cosine similarity reduces to a
//! dot product. A document that yields no terms produces a zero vector and
//! a degenerate fit, reported as `None`.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Cap on the vectoriser vocabulary within one two-document corpus.
const MAX_FEATURES: usize = 100;

/// Number of documents in every fitted corpus.
const CORPUS_SIZE: f64 = 2.0;

/// English stop words removed before vectorisation.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
        "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
        "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
        "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
        "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
        "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
        "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
        "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
        "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many",
        "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most",
        "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
        "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
        "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
        "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
        "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re", "same",
        "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
        "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
        "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
        "system", "take", "ten", "than", "that", "the", "their", "them", "themselves",
        "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
        "thereupon", "these", "they", "thick", "thin", "third", "this", "those", "though",
        "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
        "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
        "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
        "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
        "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
        "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
        "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Term frequencies within a single document, keyed alphabetically.
type Counts = BTreeMap<String, u32>;

/// Tokenise text: lowercase, split on non-word characters, keep runs of at
/// least two characters, remove stop words.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for character in lowered.chars() {
        if character.is_alphanumeric() || character == '_' {
            current.push(character);
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }
    tokens
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if token.chars().count() >= 2 && !STOP_WORDS.contains(token.as_str()) {
        tokens.push(token);
    }
}

/// Cosine similarity between the TF-IDF vectors of two documents.
///
/// Returns `None` when the fit is degenerate: no terms survive
/// tokenisation, or either document maps to a zero vector.
pub(crate) fn cosine_similarity(reference: &str, probe: &str) -> Option<f64> {
    let reference_counts = term_counts(tokenize(reference));
    let probe_counts = term_counts(tokenize(probe));
    let features = select_features(&reference_counts, &probe_counts);
    if features.is_empty() {
        return None;
    }

    let lhs = weighted_vector(&features, &reference_counts, &probe_counts);
    let rhs = weighted_vector(&features, &probe_counts, &reference_counts);
    dot_of_normalised(&lhs, &rhs)
}

fn term_counts(tokens: Vec<String>) -> Counts {
    let mut counts = Counts::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Rank candidate terms by total corpus count and keep the top
/// [`MAX_FEATURES`]. The stable sort over the alphabetical `BTreeMap`
/// ordering makes ties deterministic.
fn select_features(reference: &Counts, probe: &Counts) -> Vec<String> {
    let mut totals: BTreeMap<&str, u32> = BTreeMap::new();
    for (term, &count) in reference.iter().chain(probe.iter()) {
        *totals.entry(term.as_str()).or_insert(0) += count;
    }
    let mut ranked: Vec<(&str, u32)> = totals.into_iter().collect();
    ranked.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
    ranked.truncate(MAX_FEATURES);
    ranked.into_iter().map(|(term, _)| term.to_owned()).collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "TF-IDF weighting multiplies term frequency by inverse document frequency"
)]
fn weighted_vector(features: &[String], own: &Counts, other: &Counts) -> Vec<f64> {
    features
        .iter()
        .map(|term| {
            let tf = f64::from(own.get(term).copied().unwrap_or(0));
            let df = f64::from(
                u32::from(own.contains_key(term)) + u32::from(other.contains_key(term)),
            );
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity divides a dot product by the vector norms"
)]
fn dot_of_normalised(lhs: &[f64], rhs: &[f64]) -> Option<f64> {
    let lhs_norm = norm(lhs);
    let rhs_norm = norm(rhs);
    if lhs_norm == 0.0 || rhs_norm == 0.0 {
        return None;
    }
    let dot: f64 = lhs.iter().zip(rhs).map(|(x, y)| x * y).sum();
    Some((dot / (lhs_norm * rhs_norm)).clamp(0.0, 1.0))
}

#[expect(
    clippy::float_arithmetic,
    reason = "the L2 norm sums squared components"
)]
fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|value| value * value).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{cosine_similarity, tokenize};

    #[rstest]
    fn tokenize_removes_stop_words_and_short_tokens() {
        let tokens = tokenize("The flood was severe in a low-lying district");
        assert_eq!(tokens, ["flood", "severe", "low", "lying", "district"]);
    }

    #[rstest]
    fn tokenize_lowercases_input() {
        let tokens = tokenize("Severe FLOOD Warning");
        assert_eq!(tokens, ["severe", "flood", "warning"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a I of the")]
    #[case("!!! ... ---")]
    fn tokenize_degenerate_input_yields_no_tokens(#[case] text: &str) {
        assert!(tokenize(text).is_empty());
    }

    #[rstest]
    fn identical_documents_have_unit_similarity() {
        let similarity =
            cosine_similarity("flood storm cyclone", "flood storm cyclone").expect("non-degenerate");
        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn disjoint_documents_have_zero_similarity() {
        let similarity =
            cosine_similarity("flood storm cyclone", "budget meeting agenda").expect("non-degenerate");
        assert!(similarity.abs() < 1e-9);
    }

    #[rstest]
    fn overlapping_documents_fall_between_extremes() {
        let similarity =
            cosine_similarity("flood storm cyclone", "flood budget agenda").expect("non-degenerate");
        assert!(similarity > 0.0);
        assert!(similarity < 1.0);
    }

    #[rstest]
    fn empty_probe_is_degenerate() {
        assert!(cosine_similarity("flood storm", "").is_none());
    }

    #[rstest]
    fn stop_word_only_probe_is_degenerate() {
        assert!(cosine_similarity("flood storm", "the of and").is_none());
    }

    #[rstest]
    fn both_documents_empty_is_degenerate() {
        assert!(cosine_similarity("", "").is_none());
    }

    #[rstest]
    fn similarity_is_symmetric() {
        let forward = cosine_similarity("flood storm relief", "storm relief effort")
            .expect("non-degenerate");
        let backward = cosine_similarity("storm relief effort", "flood storm relief")
            .expect("non-degenerate");
        assert!((forward - backward).abs() < 1e-12);
    }

    #[rstest]
    fn repeated_calls_are_deterministic() {
        let first = cosine_similarity("flood storm cyclone", "flood warning issued");
        let second = cosine_similarity("flood storm cyclone", "flood warning issued");
        assert_eq!(first, second);
    }
}
