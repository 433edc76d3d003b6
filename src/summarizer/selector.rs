//! Top-N sentence selection
//!
//! Turns a [`Ranking`] back into sentence text: keeps the `top_n` best
//! sentences and returns them either in rank order or in document order.

use crate::ranking::Ranking;
use crate::types::RankMethod;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySentence {
    /// Position of the sentence in the document
    pub index: usize,
    /// The original sentence text
    pub text: String,
    /// Score under the ranking method
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone)]
pub struct Summary {
    /// Method the sentences were ranked with
    pub method: RankMethod,
    /// Selected sentences, in rank order or document order
    pub sentences: Vec<SummarySentence>,
    /// Whether the solver converged
    pub converged: bool,
    /// Solver iterations performed
    pub iterations: usize,
}

impl Summary {
    /// Selected sentence strings
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Selected sentence indices
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Picks the best sentences out of a ranking
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Number of sentences to select
    pub top_n: usize,
    /// Return sentences in document order rather than rank order
    pub sort_by_position: bool,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self {
            top_n: 4,
            sort_by_position: false,
        }
    }
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of sentences to select
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Set whether selected sentences keep document order
    pub fn with_sort_by_position(mut self, sort_by_position: bool) -> Self {
        self.sort_by_position = sort_by_position;
        self
    }

    /// Select sentences from a ranking
    ///
    /// `top_n` is clamped to the number of ranked sentences. `sentences`
    /// must be the same sequence the ranking was computed from.
    pub fn select<S: AsRef<str>>(&self, ranking: &Ranking, sentences: &[S]) -> Summary {
        let mut selected: Vec<SummarySentence> = ranking
            .top(self.top_n)
            .iter()
            .filter_map(|&index| {
                let text = sentences.get(index)?.as_ref().to_string();
                Some(SummarySentence {
                    index,
                    text,
                    score: ranking.score(index).unwrap_or(0.0),
                })
            })
            .collect();

        if self.sort_by_position {
            selected.sort_by_key(|s| s.index);
        }

        Summary {
            method: ranking.method,
            sentences: selected,
            converged: ranking.converged,
            iterations: ranking.iterations,
        }
    }
}
