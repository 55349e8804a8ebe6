//! Per-request query values.
//!
//! A [`Query`] carries everything derived from one piece of user input:
//! the raw text, its normalized token sequence, the classified intent,
//! and (once projected against an index) its vector in the catalog's
//! vocabulary space. Queries are created per request and discarded after
//! the response is produced.

use serde::Serialize;

use crate::analysis::Normalizer;
use crate::index::CatalogIndex;
use crate::intent::{Intent, IntentClassifier};

/// A single analyzed query.
#[derive(Clone, Debug, Serialize)]
pub struct Query {
    /// The raw input text.
    pub raw: String,
    /// Normalized token sequence.
    pub tokens: Vec<String>,
    /// Classified intent.
    pub intent: Intent,
    /// Unit-norm vector in the index's vocabulary space, if projected and
    /// at least one token landed in the vocabulary.
    #[serde(skip)]
    vector: Option<Vec<f32>>,
}

impl Query {
    /// Normalize and classify raw input.
    pub fn analyze(raw: &str, normalizer: &Normalizer, classifier: &IntentClassifier) -> Self {
        let tokens = normalizer.normalize(raw);
        let intent = classifier.classify(&tokens, raw);
        Query {
            raw: raw.to_string(),
            tokens,
            intent,
            vector: None,
        }
    }

    /// Project this query into the index's vector space.
    ///
    /// A vocabulary miss leaves the vector absent; the matcher then falls
    /// through to the keyword stage.
    pub fn project(mut self, index: &CatalogIndex) -> Self {
        self.vector = index.project(&self.tokens);
        self
    }

    /// The projected vector, if any.
    pub fn vector(&self) -> Option<&[f32]> {
        self.vector.as_deref()
    }

    /// Whether normalization produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
