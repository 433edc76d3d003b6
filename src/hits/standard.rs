//! Standard HITS algorithm
//!
//! ```text
//! auth(j) = Σ_i hub(i)  · w(i, j)
//! hub(i)  = Σ_j auth(j) · w(i, j)
//! ```
//!
//! Each sweep computes the authority vector from the previous hubs, then the
//! hub vector from the fresh authorities, and normalizes both to unit L2 norm.

use super::HitsResult;
use crate::errors::{Result, SummarizeError};
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;

/// Standard HITS implementation
#[derive(Debug, Clone)]
pub struct Hits {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold (L1 change of each vector)
    pub threshold: f64,
}

impl Default for Hits {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl Hits {
    /// Create a new Hits solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take iteration limits from a config
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check the solver parameters
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(format!(
                "threshold must be finite and > 0, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }
        Ok(())
    }

    /// Run HITS on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> Result<HitsResult> {
        self.validate()?;
        graph.validate()?;

        let _span = tracing::debug_span!("hits", nodes = graph.num_nodes).entered();

        let n = graph.num_nodes;
        if n == 0 {
            return Ok(HitsResult::new(vec![], vec![], 0, 0.0, true));
        }

        let mut auth = vec![1.0; n];
        let mut hub = vec![1.0; n];
        let mut new_auth = vec![0.0; n];
        let mut new_hub = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Authorities from the previous hubs
            for (node, score) in new_auth.iter_mut().enumerate() {
                *score = graph
                    .neighbors(node as u32)
                    .map(|(neighbor, weight)| hub[neighbor as usize] * weight)
                    .sum();
            }
            normalize_l2(&mut new_auth);

            // Hubs from the fresh authorities
            for (node, score) in new_hub.iter_mut().enumerate() {
                *score = graph
                    .neighbors(node as u32)
                    .map(|(neighbor, weight)| new_auth[neighbor as usize] * weight)
                    .sum();
            }
            normalize_l2(&mut new_hub);

            let auth_delta = l1_distance(&auth, &new_auth);
            let hub_delta = l1_distance(&hub, &new_hub);
            delta = auth_delta.max(hub_delta);

            std::mem::swap(&mut auth, &mut new_auth);
            std::mem::swap(&mut hub, &mut new_hub);
        }

        let converged = delta <= self.threshold;
        if converged {
            tracing::debug!(iterations, delta, "hits converged");
        } else {
            tracing::warn!(
                iterations,
                delta,
                threshold = self.threshold,
                "hits hit the iteration cap before converging"
            );
        }

        Ok(HitsResult::new(auth, hub, iterations, delta, converged))
    }
}

/// Scale to unit L2 norm
///
/// An all-zero vector (graph without edges) becomes the uniform unit vector,
/// so every node keeps an equal, non-zero score.
fn normalize_l2(values: &mut [f64]) {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in values.iter_mut() {
            *v /= norm;
        }
    } else {
        let uniform = 1.0 / (values.len() as f64).sqrt();
        values.fill(uniform);
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
