//! Sentence similarity measures
//!
//! Edge weights between two sentences are computed from their token sets
//! alone. Both measures are symmetric and return `0.0` when either set is
//! empty, so an empty sentence never gains an edge.

use crate::types::TokenSet;
use serde::{Deserialize, Serialize};

/// How the weight of the edge between two sentences is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    /// `|A ∩ B| / |A ∪ B|`
    #[default]
    Jaccard,
    /// `|A ∩ B| / (ln|A| + ln|B|)`, the sentence similarity of classic TextRank.
    Overlap,
}

impl SimilarityMeasure {
    /// Compute the similarity between two token sets
    pub fn similarity(&self, a: &TokenSet, b: &TokenSet) -> f64 {
        match self {
            Self::Jaccard => jaccard(a, b),
            Self::Overlap => log_overlap(a, b),
        }
    }
}

/// Number of shared tokens, iterating the smaller set.
fn intersection_size(a: &TokenSet, b: &TokenSet) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|t| large.contains(*t)).count()
}

/// Jaccard similarity between two sets
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = intersection_size(a, b);
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Word overlap normalized by the log lengths of both sentences
pub fn log_overlap(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let denom = (a.len() as f64).ln() + (b.len() as f64).ln();
    // Two single-token sentences give ln(1) + ln(1) = 0.
    if denom <= 0.0 {
        return 0.0;
    }
    intersection_size(a, b) as f64 / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::token_set;

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = token_set(["a", "b", "c"]);
        let b = token_set(["b", "c", "d"]);
        // Intersection: {b, c} = 2, Union: {a, b, c, d} = 4
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_identical() {
        let a = token_set(["a", "b"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_disjoint() {
        let a = token_set(["a", "b"]);
        let b = token_set(["c", "d"]);
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_sets_have_no_similarity() {
        let empty = TokenSet::default();
        let a = token_set(["a"]);
        assert_eq!(jaccard(&empty, &a), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(log_overlap(&empty, &a), 0.0);
    }

    #[test]
    fn test_jaccard_is_symmetric() {
        let a = token_set(["x", "y", "z"]);
        let b = token_set(["x"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_log_overlap() {
        let a = token_set(["a", "b", "c"]);
        let b = token_set(["b", "c", "d", "e"]);
        let expected = 2.0 / (3f64.ln() + 4f64.ln());
        assert!((log_overlap(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_log_overlap_single_tokens() {
        let a = token_set(["a"]);
        assert_eq!(log_overlap(&a, &a), 0.0);
    }

    #[test]
    fn test_measure_dispatch() {
        let a = token_set(["a", "b"]);
        let b = token_set(["b", "c"]);
        assert!((SimilarityMeasure::Jaccard.similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
        assert!(
            (SimilarityMeasure::Overlap.similarity(&a, &b) - 1.0 / (2.0 * 2f64.ln())).abs()
                < 1e-12
        );
    }
}
