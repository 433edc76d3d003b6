//! # graph_summarizer
//!
//! Extractive summarization with graph-based ranking.
//!
//! Sentences become nodes of an undirected similarity graph whose edge
//! weights measure word overlap. The graph is ranked with PageRank or HITS
//! (authority or hub scores) and the best sentences form the summary.
//!
//! ```
//! use graph_summarizer::{summarize, RankConfig, RankMethod};
//!
//! let sentences = [
//!     "Graphs model relations between sentences.",
//!     "PageRank scores sentences in the graph.",
//!     "The weather was pleasant.",
//! ];
//! let config = RankConfig::new().with_top_n(2).with_method(RankMethod::PageRank);
//! let summary = summarize(&sentences, &config).unwrap();
//! assert_eq!(summary.len(), 2);
//! ```

pub mod errors;
pub mod graph;
pub mod hits;
pub mod nlp;
pub mod pagerank;
pub mod ranking;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{token_set, RankConfig, RankMethod, TokenSet};

// Re-export main functionality
pub use graph::{
    builder::SimilarityGraphBuilder, csr::CsrGraph, similarity::SimilarityMeasure,
};
pub use hits::{standard::Hits, HitsResult};
pub use nlp::{bow::BagOfWords, stopwords::StopwordFilter};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use ranking::{rank_token_sets, Ranking, SentenceRanker};
pub use summarizer::{
    selector::{SentenceSelector, Summary, SummarySentence},
    summarize, Summarizer,
};
