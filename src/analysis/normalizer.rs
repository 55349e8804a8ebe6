//! Query and catalog text normalization pipeline.
//!
//! The [`Normalizer`] is the single analysis pipeline used everywhere in
//! the crate: catalog text at index-build time and query text at request
//! time go through the identical chain, so both end up in the same
//! vocabulary space.
//!
//! Pipeline order:
//!
//! ```text
//! Raw Text → UnicodeWordTokenizer → Lowercase → Stop → Length → Stem
//! ```
//!
//! # Examples
//!
//! ```
//! use bazaar::analysis::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let tokens = normalizer.normalize("Recommend me some running shoes!");
//!
//! assert_eq!(tokens, vec!["recommend", "runn", "sho"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::token_filter::{
    Filter, LengthFilter, LowercaseFilter, StemFilter, StopFilter,
};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Minimum surviving token length, in characters.
///
/// Two-character fragments ("tv", the "t" of "t-shirt") are dropped.
const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// A configurable normalization pipeline: one tokenizer plus a filter chain.
///
/// The default configuration tokenizes on Unicode word boundaries, then
/// lowercases, removes English stop words, drops tokens shorter than three
/// characters, and stems. Digit-only tokens are dropped unless
/// [`keep_numeric`](Normalizer::keep_numeric) is set.
///
/// Normalization is pure: identical input always yields identical output,
/// and nothing is mutated.
#[derive(Clone)]
pub struct Normalizer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    strip_numeric: bool,
}

impl Normalizer {
    /// Create a normalizer with the default pipeline.
    pub fn new() -> Self {
        Normalizer {
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            filters: vec![
                Arc::new(LowercaseFilter::new()),
                Arc::new(StopFilter::new()),
                Arc::new(LengthFilter::new(DEFAULT_MIN_TOKEN_LENGTH)),
                Arc::new(StemFilter::new()),
            ],
            strip_numeric: true,
        }
    }

    /// Create a normalizer with a custom tokenizer and no filters.
    ///
    /// Filters are added with [`add_filter`](Normalizer::add_filter).
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Normalizer {
            tokenizer,
            filters: Vec::new(),
            strip_numeric: true,
        }
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Keep digit-only tokens instead of stripping them.
    pub fn keep_numeric(mut self) -> Self {
        self.strip_numeric = false;
        self
    }

    /// Run the full pipeline, returning the surviving tokens.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut stream = self.tokenizer.tokenize(text)?;

        if self.strip_numeric {
            let kept: Vec<Token> = stream
                .filter(|token| !token.text.chars().all(|c| c.is_numeric()))
                .collect();
            stream = Box::new(kept.into_iter());
        }

        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }

        Ok(stream.collect())
    }

    /// Normalize text into its canonical token sequence.
    ///
    /// Empty or whitespace-only input yields an empty Vec; callers treat
    /// that as the signal to short-circuit to a fallback reply instead of
    /// invoking matching.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        match self.analyze(text) {
            Ok(tokens) => tokens.into_iter().map(|t| t.text).collect(),
            Err(e) => {
                tracing::debug!("normalization failed, treating as empty: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("The QUICK brown foxes are jumping!");

        // "the"/"are" are stop words, everything else is lowercased and stemmed
        assert_eq!(tokens, vec!["quick", "brown", "fox", "jump"]);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        let normalizer = Normalizer::new();
        assert!(normalizer.normalize("?!... ,,,").is_empty());
    }

    #[test]
    fn test_numeric_stripped_by_default() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("iphone 15 pro 2024");
        assert_eq!(tokens, vec!["iphone", "pro"]);
    }

    #[test]
    fn test_keep_numeric() {
        let normalizer = Normalizer::new().keep_numeric();
        let tokens = normalizer.normalize("model 2024");
        assert!(tokens.contains(&"2024".to_string()));
    }

    #[test]
    fn test_short_tokens_dropped() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("a blue t-shirt");
        // "a" is a stop word, "t" is below the length threshold
        assert_eq!(tokens, vec!["blue", "shirt"]);
    }

    #[test]
    fn test_is_pure() {
        let normalizer = Normalizer::new();
        let a = normalizer.normalize("Wireless Bluetooth Headphones");
        let b = normalizer.normalize("Wireless Bluetooth Headphones");
        assert_eq!(a, b);
    }
}
