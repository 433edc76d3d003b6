//! Similarity graph builder
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) edge lookups during construction. Nodes are sentence indices
//! assigned in insertion order.

use super::similarity::SimilarityMeasure;
use crate::errors::{Result, SummarizeError};
use crate::types::TokenSet;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Sentence count above which pair similarities are computed in parallel
pub const PARALLEL_THRESHOLD: usize = 256;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder over sentence indices
#[derive(Debug, Default)]
pub struct SimilarityGraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl SimilarityGraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Append a node, returning its sentence index
    pub fn add_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::default());
        id
    }

    /// Set the weight of the undirected edge between two nodes
    ///
    /// Self-loops and unknown node IDs are ignored. A zero weight removes
    /// the edge so that "no similarity" and "no edge" stay the same thing.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }
        let len = self.nodes.len() as u32;
        if from >= len || to >= len {
            return;
        }

        for (a, b) in [(from, to), (to, from)] {
            let edges = &mut self.nodes[a as usize].edges;
            if weight == 0.0 {
                edges.remove(&b);
            } else {
                edges.insert(b, weight);
            }
        }
    }

    /// Build the similarity graph for an ordered sequence of token sets
    ///
    /// Node `i` is sentence `i`; every pair with non-zero similarity gets an edge.
    pub fn from_token_sets(token_sets: &[TokenSet], measure: SimilarityMeasure) -> Self {
        let n = token_sets.len();
        let mut builder = Self::with_capacity(n);
        for _ in 0..n {
            builder.add_node();
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = measure.similarity(&token_sets[i], &token_sets[j]);
                if weight > 0.0 {
                    builder.set_edge(i as u32, j as u32, weight);
                }
            }
        }

        builder
    }

    /// Like [`from_token_sets`](Self::from_token_sets), but first checks that
    /// there is exactly one token set per sentence.
    pub fn from_token_sets_checked(
        token_sets: &[TokenSet],
        num_sentences: usize,
        measure: SimilarityMeasure,
    ) -> Result<Self> {
        if token_sets.len() != num_sentences {
            return Err(SummarizeError::invalid_input(format!(
                "expected {num_sentences} token sets (one per sentence), got {}",
                token_sets.len()
            )));
        }
        Ok(build_graph_parallel(token_sets, measure))
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Weight of the edge between two nodes, if any
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.get_node(from).and_then(|n| n.edges.get(&to).copied())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build a similarity graph, computing pair weights in parallel for large documents
///
/// Each row of the upper triangle is scored independently; rows are merged
/// in index order so the result matches the sequential build exactly.
pub fn build_graph_parallel(token_sets: &[TokenSet], measure: SimilarityMeasure) -> SimilarityGraphBuilder {
    // For small documents, sequential is faster
    if token_sets.len() < PARALLEL_THRESHOLD {
        return SimilarityGraphBuilder::from_token_sets(token_sets, measure);
    }

    let n = token_sets.len();
    let rows: Vec<Vec<(u32, f64)>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .filter_map(|j| {
                    let weight = measure.similarity(&token_sets[i], &token_sets[j]);
                    (weight > 0.0).then_some((j as u32, weight))
                })
                .collect()
        })
        .collect();

    let mut builder = SimilarityGraphBuilder::with_capacity(n);
    for _ in 0..n {
        builder.add_node();
    }
    for (i, row) in rows.into_iter().enumerate() {
        for (j, weight) in row {
            builder.set_edge(i as u32, j, weight);
        }
    }

    builder
}
