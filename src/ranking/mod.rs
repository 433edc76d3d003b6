//! Ranking orchestration
//!
//! Selects a solver for the configured [`RankMethod`], runs it on a frozen
//! sentence graph, and orders sentence indices by descending score. Equal
//! scores are ordered by ascending sentence index, so the output never
//! depends on solver iteration order.

use crate::errors::Result;
use crate::graph::builder::{build_graph_parallel, SimilarityGraphBuilder};
use crate::graph::csr::CsrGraph;
use crate::hits::standard::Hits;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{RankConfig, RankMethod, TokenSet};

/// Sentence indices sorted by descending score, ties by ascending index
pub fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order
}

/// Output of one ranking run
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Method that produced the scores
    pub method: RankMethod,
    /// Sentence indices, most important first
    pub order: Vec<usize>,
    /// Score per sentence index (not reordered)
    pub scores: Vec<f64>,
    /// Solver iterations performed
    pub iterations: usize,
    /// Whether the solver converged before its iteration cap
    pub converged: bool,
}

impl Ranking {
    /// The `n` most important sentence indices (fewer if the document is shorter)
    pub fn top(&self, n: usize) -> &[usize] {
        &self.order[..n.min(self.order.len())]
    }

    /// Score of a sentence, if it exists
    pub fn score(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Runs the configured solver and orders sentences
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    config: RankConfig,
}

impl SentenceRanker {
    /// Create a ranker, rejecting invalid configuration up front
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Ranker with default configuration and the given method
    pub fn with_method(method: RankMethod) -> Self {
        Self {
            config: RankConfig::default().with_method(method),
        }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Rank every sentence of a built graph
    pub fn rank(&self, graph: &CsrGraph) -> Result<Ranking> {
        let method = self.config.method;
        let _span = tracing::debug_span!("rank", method = method.as_str()).entered();

        let (scores, iterations, converged) = match method {
            RankMethod::PageRank => {
                let result = StandardPageRank::from_config(&self.config).run(graph)?;
                (result.scores, result.iterations, result.converged)
            }
            RankMethod::HitsAuthority | RankMethod::HitsHub => {
                let result = Hits::from_config(&self.config).run(graph)?;
                let scores = if method == RankMethod::HitsAuthority {
                    result.authorities
                } else {
                    result.hubs
                };
                (scores, result.iterations, result.converged)
            }
        };

        let order = descending_order(&scores);
        tracing::debug!(sentences = order.len(), iterations, converged, "ranked sentences");

        Ok(Ranking {
            method,
            order,
            scores,
            iterations,
            converged,
        })
    }

    /// Build the similarity graph for `token_sets` and rank it
    pub fn rank_token_sets(&self, token_sets: &[TokenSet]) -> Result<Ranking> {
        self.rank_builder(&build_graph_parallel(token_sets, self.config.similarity))
    }

    /// Like [`rank_token_sets`](Self::rank_token_sets), but fails with
    /// `InvalidInput` unless there is exactly one token set per sentence.
    pub fn rank_aligned(&self, token_sets: &[TokenSet], num_sentences: usize) -> Result<Ranking> {
        let builder = SimilarityGraphBuilder::from_token_sets_checked(
            token_sets,
            num_sentences,
            self.config.similarity,
        )?;
        self.rank_builder(&builder)
    }

    fn rank_builder(&self, builder: &SimilarityGraphBuilder) -> Result<Ranking> {
        let graph = CsrGraph::from_builder(builder);
        tracing::debug!(
            nodes = graph.num_nodes,
            edges = graph.num_edges() / 2,
            "built sentence graph"
        );
        self.rank(&graph)
    }
}

/// Build and rank in one call
pub fn rank_token_sets(token_sets: &[TokenSet], config: &RankConfig) -> Result<Ranking> {
    SentenceRanker::new(config.clone())?.rank_token_sets(token_sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizeError;
    use crate::types::token_set;

    fn star_sets() -> Vec<TokenSet> {
        vec![
            token_set(["x"]),
            token_set(["y"]),
            token_set(["x", "y", "z"]),
            token_set(["z"]),
        ]
    }

    #[test]
    fn test_descending_order_ties_by_index() {
        let order = descending_order(&[0.2, 0.5, 0.2, 0.5, 0.1]);
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_descending_order_empty() {
        assert!(descending_order(&[]).is_empty());
    }

    #[test]
    fn test_star_center_ranks_first() {
        for method in [RankMethod::PageRank, RankMethod::HitsAuthority] {
            let ranking = SentenceRanker::with_method(method)
                .rank_token_sets(&star_sets())
                .unwrap();
            assert_eq!(ranking.method, method);
            assert_eq!(ranking.order[0], 2, "{method} should rank the center first");
            assert_eq!(ranking.len(), 4);
        }

        let hubs = SentenceRanker::with_method(RankMethod::HitsHub)
            .rank_token_sets(&star_sets())
            .unwrap();
        assert_eq!(hubs.len(), 4);
    }

    #[test]
    fn test_empty_input_ranks_nothing() {
        for method in [RankMethod::PageRank, RankMethod::HitsAuthority, RankMethod::HitsHub] {
            let ranking = SentenceRanker::with_method(method).rank_token_sets(&[]).unwrap();
            assert!(ranking.is_empty());
            assert!(ranking.top(4).is_empty());
        }
    }

    #[test]
    fn test_single_sentence() {
        let sets = vec![token_set(["only"])];
        for method in [RankMethod::PageRank, RankMethod::HitsAuthority, RankMethod::HitsHub] {
            let ranking = SentenceRanker::with_method(method).rank_token_sets(&sets).unwrap();
            assert_eq!(ranking.order, vec![0]);
            assert!(ranking.score(0).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_top_clamps() {
        let ranking = SentenceRanker::default().rank_token_sets(&star_sets()).unwrap();
        assert_eq!(ranking.top(2).len(), 2);
        assert_eq!(ranking.top(10).len(), 4);
        assert_eq!(ranking.top(0).len(), 0);
    }

    #[test]
    fn test_rank_aligned_rejects_mismatch() {
        let err = SentenceRanker::default()
            .rank_aligned(&star_sets(), 3)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));

        let ranking = SentenceRanker::default().rank_aligned(&star_sets(), 4).unwrap();
        assert_eq!(ranking.order[0], 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SentenceRanker::new(RankConfig::new().with_damping(2.0)).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_graph_surfaces() {
        let mut builder = SimilarityGraphBuilder::new();
        let a = builder.add_node();
        let b = builder.add_node();
        builder.set_edge(a, b, -1.0);
        let graph = CsrGraph::from_builder(&builder);

        let err = SentenceRanker::default().rank(&graph).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidGraph(_)));
    }

    #[test]
    fn test_free_function_matches_ranker() {
        let config = RankConfig::new().with_method(RankMethod::HitsAuthority);
        let a = rank_token_sets(&star_sets(), &config).unwrap();
        let b = SentenceRanker::new(config).unwrap().rank_token_sets(&star_sets()).unwrap();
        assert_eq!(a.order, b.order);
        assert_eq!(a.scores, b.scores);
    }
}
