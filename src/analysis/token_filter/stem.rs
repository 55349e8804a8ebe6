//! Stemming filter implementation.
//!
//! Reduces tokens to a crude stem by stripping common English suffixes,
//! so that "running", "runs" and "run" land on the same vocabulary term.
//! This is deliberately simple suffix stripping, not a full Porter
//! implementation; catalog text is short and a light touch is enough to
//! line up query and product vocabulary.
//!
//! # Examples
//!
//! ```
//! use bazaar::analysis::token::Token;
//! use bazaar::analysis::token_filter::{Filter, StemFilter};
//!
//! let filter = StemFilter::new();
//! let tokens = vec![Token::new("running", 0), Token::new("shoes", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "runn");
//! assert_eq!(result[1].text, "sho");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for algorithms that reduce a word to its stem.
pub trait Stemmer: Send + Sync {
    /// Stem a single word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Simple stemmer that removes common English suffixes.
///
/// Suffixes are tried longest first; a suffix is only stripped when at
/// least three characters of stem remain, so short words pass through
/// unchanged.
#[derive(Debug, Clone)]
pub struct SimpleStemmer {
    /// Suffixes to strip, sorted longest first.
    suffixes: Vec<String>,
}

impl SimpleStemmer {
    /// Create a new simple stemmer with the default English suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(vec![
            "ing".to_string(),
            "ed".to_string(),
            "er".to_string(),
            "est".to_string(),
            "ly".to_string(),
            "s".to_string(),
            "es".to_string(),
            "ies".to_string(),
            "ied".to_string(),
            "tion".to_string(),
            "sion".to_string(),
            "able".to_string(),
            "ible".to_string(),
            "ment".to_string(),
            "ness".to_string(),
            "ful".to_string(),
        ])
    }

    /// Create a simple stemmer with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
        SimpleStemmer { suffixes }
    }
}

impl Default for SimpleStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SimpleStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 3 {
            return word.to_string();
        }

        for suffix in &self.suffixes {
            if word.len() > suffix.len() + 2 && word.ends_with(suffix.as_str()) {
                return word[..word.len() - suffix.len()].to_string();
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// A filter that applies a [`Stemmer`] to every token.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    /// Create a new stem filter using the [`SimpleStemmer`].
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(SimpleStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        let stemmed: Vec<Token> = tokens
            .map(|token| {
                let stem = stemmer.stem(&token.text);
                if stem == token.text {
                    token
                } else {
                    token.with_text(stem)
                }
            })
            .collect();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
