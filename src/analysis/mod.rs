//! Text analysis pipeline: tokenization, filtering, and normalization.
//!
//! This module turns raw text into the canonical token sequences the rest
//! of the crate works with. The same [`Normalizer`] instance is used for
//! catalog text at index-build time and for query text at request time,
//! which keeps both in one vocabulary space.
//!
//! # Module Structure
//!
//! - [`token`]: the [`Token`](token::Token) type and stream alias
//! - [`tokenizer`]: the [`Tokenizer`](tokenizer::Tokenizer) trait and
//!   Unicode word-boundary implementation
//! - [`token_filter`]: the [`Filter`](token_filter::Filter) trait with
//!   lowercase, stop-word, length, and stemming filters
//! - [`normalizer`]: the [`Normalizer`] pipeline combining the above

pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::Normalizer;
pub use token::Token;
