//! Lowercase filter implementation.
//!
//! Converts all token text to lowercase for case-insensitive matching.
//!
//! # Examples
//!
//! ```
//! use bazaar::analysis::token::Token;
//! use bazaar::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Nike", 0), Token::new("SHOES", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "nike");
//! assert_eq!(result[1].text, "shoes");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Token positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lowered: Vec<Token> = tokens
            .map(|mut token| {
                if token.text.chars().any(|c| c.is_uppercase()) {
                    token.text = token.text.to_lowercase();
                }
                token
            })
            .collect();

        Ok(Box::new(lowered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
