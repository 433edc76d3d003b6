//! Bag-of-words extraction
//!
//! Reduces a sentence to the set of its significant words: maximal runs of
//! word characters (letters, digits, `_`) and apostrophes, lowercased, with
//! stopwords removed.

use super::stopwords::StopwordFilter;
use crate::types::TokenSet;

/// Turns sentence strings into [`TokenSet`]s
#[derive(Debug, Clone, Default)]
pub struct BagOfWords {
    stopwords: StopwordFilter,
}

impl BagOfWords {
    /// Extractor using the stopword list for `language`
    pub fn new(language: &str) -> Self {
        Self::with_stopwords(StopwordFilter::new(language))
    }

    /// Extractor using an explicit stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Significant words of a sentence
    pub fn extract(&self, sentence: &str) -> TokenSet {
        words(sentence)
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }

    /// Token sets for a sequence of sentences, in order
    pub fn extract_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<TokenSet> {
        sentences.iter().map(|s| self.extract(s.as_ref())).collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Word-like substrings of `text`, in order, duplicates kept
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}
