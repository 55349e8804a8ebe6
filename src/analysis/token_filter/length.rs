//! Length filter implementation.
//!
//! Drops tokens shorter than a minimum character length. Very short
//! tokens ("a", "tv" split fragments, stray letters from hyphenated words)
//! add noise to the vector space without contributing signal.
//!
//! # Examples
//!
//! ```
//! use bazaar::analysis::token::Token;
//! use bazaar::analysis::token_filter::{Filter, LengthFilter};
//!
//! let filter = LengthFilter::new(3);
//! let tokens = vec![Token::new("t", 0), Token::new("shirt", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "shirt");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum length.
///
/// Length is measured in characters, not bytes.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    /// Minimum number of characters a token must have to survive.
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter with the given minimum character count.
    pub fn new(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_length)
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
