//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! both PageRank and HITS need during power iteration. A `CsrGraph` is
//! frozen: it is built once from a [`SimilarityGraphBuilder`] and never
//! mutated afterwards.

use super::builder::SimilarityGraphBuilder;
use crate::errors::{Result, SummarizeError};

/// Relative slack allowed when comparing stored and recomputed weights
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// A sentence graph in Compressed Sparse Row format
///
/// Every undirected edge is stored twice, once per endpoint.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a SimilarityGraphBuilder into CSR format
    pub fn from_builder(builder: &SimilarityGraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            // Collect and sort edges for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with zero total edge weight)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }

    /// Check that the graph is well-formed for ranking
    ///
    /// Fails with [`SummarizeError::InvalidGraph`] on inconsistent row
    /// layout, negative or non-finite weights, self-loops, out-of-range
    /// targets, stale total weights, or an edge without its reverse.
    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;

        for node in 0..self.num_nodes as u32 {
            let mut row_sum = 0.0;
            for (target, weight) in self.neighbors(node) {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(SummarizeError::invalid_graph(format!(
                        "edge {node}-{target} has weight {weight}, expected a finite non-negative value"
                    )));
                }
                if target == node {
                    return Err(SummarizeError::invalid_graph(format!(
                        "self-loop on node {node}"
                    )));
                }
                if target as usize >= self.num_nodes {
                    return Err(SummarizeError::invalid_graph(format!(
                        "edge {node}-{target} points outside the {} nodes",
                        self.num_nodes
                    )));
                }
                row_sum += weight;
            }

            let stored = self.total_weight[node as usize];
            let drift = (stored - row_sum).abs();
            if drift.is_nan() || drift > WEIGHT_TOLERANCE * row_sum.max(1.0) {
                return Err(SummarizeError::invalid_graph(format!(
                    "node {node} has total weight {stored}, but its edges sum to {row_sum}"
                )));
            }
        }

        // Both solvers assume w(i, j) == w(j, i)
        for node in 0..self.num_nodes as u32 {
            for (target, weight) in self.neighbors(node) {
                let reverse = self
                    .neighbors(target)
                    .find(|&(back, _)| back == node)
                    .map(|(_, w)| w);
                match reverse {
                    Some(w) if (w - weight).abs() <= WEIGHT_TOLERANCE * weight.max(1.0) => {}
                    Some(w) => {
                        return Err(SummarizeError::invalid_graph(format!(
                            "edge {node}-{target} has weight {weight} but {target}-{node} has {w}"
                        )));
                    }
                    None => {
                        return Err(SummarizeError::invalid_graph(format!(
                            "edge {node}-{target} has no reverse edge"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Array lengths and row pointers, checked before any row is read
    fn validate_layout(&self) -> Result<()> {
        if self.row_ptr.len() != self.num_nodes + 1 {
            return Err(SummarizeError::invalid_graph(format!(
                "row pointer length {} does not match {} nodes",
                self.row_ptr.len(),
                self.num_nodes
            )));
        }
        if self.total_weight.len() != self.num_nodes {
            return Err(SummarizeError::invalid_graph(format!(
                "total weight length {} does not match {} nodes",
                self.total_weight.len(),
                self.num_nodes
            )));
        }
        if self.weights.len() != self.col_idx.len() {
            return Err(SummarizeError::invalid_graph(format!(
                "{} weights for {} edges",
                self.weights.len(),
                self.col_idx.len()
            )));
        }
        if self.row_ptr[0] != 0 {
            return Err(SummarizeError::invalid_graph("row pointers must start at 0"));
        }
        if self.row_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(SummarizeError::invalid_graph(
                "row pointers must be non-decreasing",
            ));
        }
        if self.row_ptr[self.num_nodes] != self.col_idx.len() {
            return Err(SummarizeError::invalid_graph(format!(
                "row pointers end at {}, but there are {} edges",
                self.row_ptr[self.num_nodes],
                self.col_idx.len()
            )));
        }
        Ok(())
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> SimilarityGraphBuilder {
        let mut builder = SimilarityGraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        let c = builder.add_node();

        builder.set_edge(a, b, 1.0);
        builder.set_edge(b, c, 2.0);
        builder.set_edge(a, c, 1.5);

        builder
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 6);
        assert!(csr.validate().is_ok());
    }

    #[test]
    fn test_neighbor_iteration_is_sorted() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        // Node 0 should have neighbors 1 and 2, in that order
        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].0, 1);
        assert_eq!(neighbors[1].0, 2);
        assert!((neighbors[0].1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_weight() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        // Total weight should be 1.0 + 1.5 = 2.5
        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_builder(&SimilarityGraphBuilder::new());

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.validate().is_ok());
    }

    #[test]
    fn test_dangling_nodes() {
        let mut builder = SimilarityGraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        let _c = builder.add_node(); // No edges
        builder.set_edge(a, b, 1.0);

        let csr = CsrGraph::from_builder(&builder);
        assert_eq!(csr.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let mut builder = SimilarityGraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        builder.set_edge(a, b, -0.5);

        let err = CsrGraph::from_builder(&builder).validate().unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidGraph(_)));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut builder = SimilarityGraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        builder.set_edge(a, b, f64::NAN);

        assert!(CsrGraph::from_builder(&builder).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_target() {
        let mut csr = CsrGraph::from_builder(&build_test_graph());
        csr.col_idx[0] = 9;
        assert!(csr.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_row_ptr_past_edges() {
        let csr = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 1, 5],
            col_idx: vec![1],
            weights: vec![0.5],
            total_weight: vec![0.5, 0.0],
        };
        let err = csr.validate().unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidGraph(_)));
    }

    #[test]
    fn test_validate_rejects_decreasing_row_ptr() {
        let mut csr = CsrGraph::from_builder(&build_test_graph());
        csr.row_ptr[1] = 5;
        assert!(matches!(csr.validate(), Err(SummarizeError::InvalidGraph(_))));
    }

    #[test]
    fn test_validate_rejects_mismatched_lengths() {
        let mut short_weights = CsrGraph::from_builder(&build_test_graph());
        short_weights.weights.pop();
        assert!(matches!(
            short_weights.validate(),
            Err(SummarizeError::InvalidGraph(_))
        ));

        let mut short_totals = CsrGraph::from_builder(&build_test_graph());
        short_totals.total_weight.pop();
        assert!(matches!(
            short_totals.validate(),
            Err(SummarizeError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_validate_rejects_stale_total_weight() {
        let mut csr = CsrGraph::from_builder(&build_test_graph());
        csr.total_weight[1] += 1.0;
        assert!(matches!(csr.validate(), Err(SummarizeError::InvalidGraph(_))));
    }

    #[test]
    fn test_validate_rejects_one_way_edge() {
        let csr = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 1, 1],
            col_idx: vec![1],
            weights: vec![0.5],
            total_weight: vec![0.5, 0.0],
        };
        let err = csr.validate().unwrap_err();
        assert!(err.to_string().contains("no reverse edge"));
    }

    #[test]
    fn test_validate_rejects_asymmetric_weights() {
        let mut csr = CsrGraph::from_builder(&build_test_graph());
        // Node 0's first edge is 0-1; change it without touching 1-0
        csr.weights[0] = 3.0;
        csr.total_weight[0] = 4.5;
        assert!(matches!(csr.validate(), Err(SummarizeError::InvalidGraph(_))));
    }
}
