//! PageRank over the sentence graph
//!
//! This module provides the damped power-iteration solver and its result.

pub mod standard;

use crate::ranking::descending_order;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence index)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score, ties broken by ascending index
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        descending_order(&self.scores)
            .into_iter()
            .take(n)
            .map(|i| (i as u32, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
