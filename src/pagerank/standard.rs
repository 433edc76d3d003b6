//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration over weighted
//! edges. A dangling node (zero total edge weight) hands its mass to
//! every other node in equal parts.

use super::PageRankResult;
use crate::errors::{Result, SummarizeError};
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping and iteration limits from a config
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
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
        if self.damping.is_nan() || self.damping <= 0.0 || self.damping >= 1.0 {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
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

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    /// Fails if the parameters or the graph are invalid.
    pub fn run(&self, graph: &CsrGraph) -> Result<PageRankResult> {
        self.validate()?;
        graph.validate()?;

        let _span = tracing::debug_span!("pagerank", nodes = graph.num_nodes).entered();

        let n = graph.num_nodes;
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0, true));
        }
        if n == 1 {
            return Ok(PageRankResult::new(vec![1.0], 0, 0.0, true));
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let others = (n - 1) as f64;

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Dangling mass goes to every node except its source
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / others);
            for &d in &dangling_nodes {
                new_scores[d as usize] -= self.damping * scores[d as usize] / others;
            }

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Swap buffers
            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.threshold;
        if converged {
            tracing::debug!(iterations, delta, "pagerank converged");
        } else {
            tracing::warn!(
                iterations,
                delta,
                threshold = self.threshold,
                "pagerank hit the iteration cap before converging"
            );
        }

        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }
}
