//! Natural Language Processing components
//!
//! This module provides bag-of-words extraction and stopword filtering.

pub mod bow;
pub mod stopwords;
