//! Extractive summarization
//!
//! Ties the pieces together: sentence strings are reduced to token sets,
//! linked into a similarity graph, ranked, and the best `top_n` sentences
//! are returned. Splitting raw text into sentences is left to the caller.

pub mod selector;

use crate::errors::Result;
use crate::nlp::bow::BagOfWords;
use crate::ranking::SentenceRanker;
use crate::types::{RankConfig, TokenSet};
use selector::{SentenceSelector, Summary};

/// Summarizer over pre-split sentences
#[derive(Debug, Clone)]
pub struct Summarizer {
    ranker: SentenceRanker,
    selector: SentenceSelector,
    extractor: BagOfWords,
}

impl Summarizer {
    /// Create a summarizer; stopwords follow `config.language`
    pub fn new(config: RankConfig) -> Result<Self> {
        let extractor = BagOfWords::new(&config.language);
        let selector = SentenceSelector::new()
            .with_top_n(config.top_n)
            .with_sort_by_position(config.sort_by_position);
        Ok(Self {
            ranker: SentenceRanker::new(config)?,
            selector,
            extractor,
        })
    }

    /// Replace the bag-of-words extractor (e.g. with a custom stopword list)
    pub fn with_extractor(mut self, extractor: BagOfWords) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &RankConfig {
        self.ranker.config()
    }

    /// Summarize a document given as an ordered list of sentences
    pub fn summarize<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Summary> {
        let token_sets = self.extractor.extract_all(sentences);
        self.summarize_with_tokens(sentences, &token_sets)
    }

    /// Summarize with caller-supplied token sets, one per sentence
    ///
    /// Fails with `InvalidInput` if the two sequences differ in length.
    pub fn summarize_with_tokens<S: AsRef<str>>(
        &self,
        sentences: &[S],
        token_sets: &[TokenSet],
    ) -> Result<Summary> {
        let _span = tracing::info_span!("summarize", sentences = sentences.len()).entered();

        let ranking = self.ranker.rank_aligned(token_sets, sentences.len())?;
        let summary = self.selector.select(&ranking, sentences);

        tracing::info!(
            method = summary.method.as_str(),
            selected = summary.len(),
            converged = summary.converged,
            "summary ready"
        );
        Ok(summary)
    }
}

/// Summarize `sentences` with `config` in one call
pub fn summarize<S: AsRef<str>>(sentences: &[S], config: &RankConfig) -> Result<Summary> {
    Summarizer::new(config.clone())?.summarize(sentences)
}
