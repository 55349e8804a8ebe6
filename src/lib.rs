//! # Bazaar
//!
//! The query-understanding and product-matching engine behind a
//! conversational shopping assistant.
//!
//! ## Features
//!
//! - Pure Rust text normalization pipeline (tokenize, stop, stem)
//! - One-shot TF-IDF vector-space index over an in-memory catalog
//! - Ordered-rule intent classification
//! - Cosine-similarity ranking with a semantic → keyword → category →
//!   default fallback chain
//! - Lock-free concurrent request handling over immutable state
//! - Pluggable Agent Mode (external generative service) integration

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod index;
pub mod intent;
pub mod matcher;
pub mod query;
pub mod router;

pub mod prelude {
    pub use crate::analysis::Normalizer;
    pub use crate::catalog::{loader, Catalog, Product};
    pub use crate::error::{BazaarError, Result};
    pub use crate::index::CatalogIndex;
    pub use crate::intent::{ConversationTopic, Intent, IntentClassifier};
    pub use crate::matcher::{MatchConfig, MatchResult, MatchStage, Matcher};
    pub use crate::query::Query;
    pub use crate::router::{AgentResponder, QueryRouter, RouterResponse};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
