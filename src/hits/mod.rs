//! HITS (hubs and authorities) over the sentence graph
//!
//! On a symmetric similarity graph a sentence is a good authority when it is
//! similar to good hubs, and a good hub when it is similar to good
//! authorities. The two vectors are computed by alternating power iteration.

pub mod standard;

use crate::ranking::descending_order;

/// Result of a HITS computation
#[derive(Debug, Clone)]
pub struct HitsResult {
    /// Authority score per node, unit L2 norm
    pub authorities: Vec<f64>,
    /// Hub score per node, unit L2 norm
    pub hubs: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Larger of the final authority and hub L1 deltas
    pub delta: f64,
    /// Whether both vectors converged
    pub converged: bool,
}

impl HitsResult {
    pub fn new(
        authorities: Vec<f64>,
        hubs: Vec<f64>,
        iterations: usize,
        delta: f64,
        converged: bool,
    ) -> Self {
        Self {
            authorities,
            hubs,
            iterations,
            delta,
            converged,
        }
    }

    /// Top N nodes by authority, ties broken by ascending index
    pub fn top_authorities(&self, n: usize) -> Vec<(u32, f64)> {
        top_n(&self.authorities, n)
    }

    /// Top N nodes by hub score, ties broken by ascending index
    pub fn top_hubs(&self, n: usize) -> Vec<(u32, f64)> {
        top_n(&self.hubs, n)
    }
}

fn top_n(scores: &[f64], n: usize) -> Vec<(u32, f64)> {
    descending_order(scores)
        .into_iter()
        .take(n)
        .map(|i| (i as u32, scores[i]))
        .collect()
}
