//! Core types for graph_summarizer
//!
//! This module defines the token-set representation, the ranking method
//! selector, and the configuration shared by the ranker and the summarizer.

use crate::errors::{Result, SummarizeError};
use crate::graph::similarity::SimilarityMeasure;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Token sets
// ============================================================================

/// The normalized significant words of one sentence.
pub type TokenSet = FxHashSet<String>;

/// Build a [`TokenSet`] from anything yielding string-like words.
pub fn token_set<I, S>(words: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}

// ============================================================================
// Ranking method
// ============================================================================

/// Link-analysis score used to order sentences.
///
/// Deserialization goes through [`FromStr`], so JSON accepts the same names
/// (and legacy aliases) as `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RankMethod {
    /// Damped random-walk stationary distribution.
    #[default]
    #[serde(rename = "pagerank")]
    PageRank,
    /// HITS authority vector.
    #[serde(rename = "hits_authority")]
    HitsAuthority,
    /// HITS hub vector.
    #[serde(rename = "hits_hub")]
    HitsHub,
}

impl RankMethod {
    /// Canonical names accepted by [`RankMethod::from_str`].
    pub const NAMES: &'static [&'static str] = &["pagerank", "hits_authority", "hits_hub"];

    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageRank => "pagerank",
            Self::HitsAuthority => "hits_authority",
            Self::HitsHub => "hits_hub",
        }
    }

    /// Whether this method needs the HITS solver.
    pub fn is_hits(&self) -> bool {
        matches!(self, Self::HitsAuthority | Self::HitsHub)
    }
}

impl fmt::Display for RankMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMethod {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "pagerank" | "page_rank" => Ok(Self::PageRank),
            "hits_authority" | "hits_auths" | "hits_authorities" => Ok(Self::HitsAuthority),
            "hits_hub" | "hits_hubs" => Ok(Self::HitsHub),
            _ => Err(SummarizeError::unsupported_method(value, Self::NAMES)),
        }
    }
}

impl TryFrom<String> for RankMethod {
    type Error = SummarizeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for ranking and summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Which score orders the sentences
    pub method: RankMethod,
    /// Number of sentences a summary keeps (clamped to the sentence count)
    pub top_n: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L1 change between iterations
    pub convergence_threshold: f64,
    /// Maximum iterations for either solver
    pub max_iterations: usize,
    /// Edge weight between two token sets
    pub similarity: SimilarityMeasure,
    /// Return summary sentences in document order instead of rank order
    pub sort_by_position: bool,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            method: RankMethod::PageRank,
            top_n: 4,
            damping: 0.85,
            convergence_threshold: 1e-6,
            max_iterations: 100,
            similarity: SimilarityMeasure::Jaccard,
            sort_by_position: false,
            language: "en".to_string(),
        }
    }
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults.
    ///
    /// An unknown `method` fails with [`SummarizeError::UnsupportedMethod`]
    /// rather than a generic parse error.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let method = match value.as_object_mut().and_then(|fields| fields.remove("method")) {
            Some(serde_json::Value::String(name)) => Some(name.parse::<RankMethod>()?),
            Some(other) => {
                return Err(SummarizeError::invalid_config(format!(
                    "method must be a string, got {other}"
                )))
            }
            None => None,
        };

        let mut config: Self = serde_json::from_value(value)?;
        if let Some(method) = method {
            config.method = method;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_method(mut self, method: RankMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityMeasure) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_sort_by_position(mut self, sort_by_position: bool) -> Self {
        self.sort_by_position = sort_by_position;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.damping.is_nan() || self.damping <= 0.0 || self.damping >= 1.0 {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }

        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(format!(
                "convergence_threshold must be finite and > 0, got {}",
                self.convergence_threshold
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }
}
