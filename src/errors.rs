//! Error types for graph_summarizer
//!
//! Every failure in this crate is deterministic: the same input always
//! produces the same error, and nothing is retried internally.

use thiserror::Error;

/// Top-level error type for summarization and ranking.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Token-set input does not line up with the sentences it describes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A graph handed to a solver is ill-formed (e.g. a negative edge weight).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Ranking method name not recognized.
    #[error("unsupported ranking method \"{method}\", expected one of: {}", .valid.join(", "))]
    UnsupportedMethod {
        method: String,
        valid: &'static [&'static str],
    },

    /// Configuration value outside its allowed domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON configuration.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SummarizeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        Self::InvalidGraph(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn unsupported_method(method: impl Into<String>, valid: &'static [&'static str]) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
            valid,
        }
    }
}

/// Result type for graph_summarizer operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_method_lists_valid_names() {
        let err = SummarizeError::unsupported_method("bogus", &["pagerank", "hits_hub"]);
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("pagerank, hits_hub"));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SummarizeError = parse.unwrap_err().into();
        assert!(matches!(err, SummarizeError::Serde(_)));
    }
}
