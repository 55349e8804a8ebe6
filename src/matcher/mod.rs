//! Product matching and ranking.
//!
//! The [`Matcher`] scores catalog products against a query through a
//! strict fallback chain, each stage attempted only when the previous one
//! produced nothing:
//!
//! 1. **Semantic** — cosine similarity between the query's TF-IDF vector
//!    and every product vector, thresholded at
//!    [`MatchConfig::semantic_threshold`].
//! 2. **Keyword** — token overlap between the query and each product's
//!    name, brand, category, and tags.
//! 3. **Category** — a query token exactly names a known category; every
//!    product of that category qualifies.
//! 4. **Default** — the first products by ascending id at score zero, so
//!    a non-empty catalog never produces an empty answer on vocabulary
//!    mismatch.
//!
//! An empty catalog is the only input for which matching returns an empty
//! list. Results are always sorted by score descending with ties broken
//! by ascending product id, and truncated to the caller's limit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ahash::AHashSet;

use crate::analysis::Normalizer;
use crate::catalog::{Catalog, Product};
use crate::index::CatalogIndex;
use crate::query::Query;

/// Which stage of the fallback chain produced a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Semantic,
    Keyword,
    Category,
    Default,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchStage::Semantic => "semantic",
            MatchStage::Keyword => "keyword",
            MatchStage::Category => "category",
            MatchStage::Default => "default",
        };
        write!(f, "{name}")
    }
}

/// A scored product match.
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    /// The matched product, flattened into the serialized form.
    #[serde(flatten)]
    pub product: Product,
    /// Score in [0, 1]. Comparable within one stage, not across stages.
    pub score: f32,
    /// The fallback stage that produced this match.
    pub matched_via: MatchStage,
}

/// Matching parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum cosine similarity for the semantic stage. Low by default:
    /// catalog descriptions are short, so honest matches score modestly.
    pub semantic_threshold: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            semantic_threshold: 0.05,
        }
    }
}

/// Scores and ranks catalog products for a query via the fallback chain.
#[derive(Clone)]
pub struct Matcher {
    normalizer: Normalizer,
    config: MatchConfig,
}

impl Matcher {
    /// Create a matcher with default configuration.
    pub fn new(normalizer: Normalizer) -> Self {
        Self::with_config(normalizer, MatchConfig::default())
    }

    /// Create a matcher with explicit configuration.
    pub fn with_config(normalizer: Normalizer, config: MatchConfig) -> Self {
        Matcher { normalizer, config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the fallback chain, returning at most `top_n` results.
    pub fn top_matches(
        &self,
        query: &Query,
        catalog: &Catalog,
        index: &CatalogIndex,
        top_n: usize,
    ) -> Vec<MatchResult> {
        if catalog.is_empty() || top_n == 0 {
            return Vec::new();
        }

        let results = self.semantic_stage(query, catalog, index);
        if !results.is_empty() {
            debug!(hits = results.len(), "semantic stage matched");
            return finish(results, top_n);
        }

        let results = self.keyword_stage(query, catalog);
        if !results.is_empty() {
            debug!(hits = results.len(), "keyword stage matched");
            return finish(results, top_n);
        }

        let results = self.category_stage(query, catalog, index);
        if !results.is_empty() {
            debug!(hits = results.len(), "category stage matched");
            return finish(results, top_n);
        }

        debug!("falling through to default stage");
        finish(self.default_stage(catalog, top_n), top_n)
    }

    /// Stage 1: cosine similarity in the shared vector space.
    fn semantic_stage(
        &self,
        query: &Query,
        catalog: &Catalog,
        index: &CatalogIndex,
    ) -> Vec<MatchResult> {
        let projected;
        let vector = match query.vector() {
            Some(v) => Some(v),
            None => {
                projected = index.project(&query.tokens);
                projected.as_deref()
            }
        };
        let Some(vector) = vector else {
            return Vec::new();
        };

        catalog
            .iter()
            .filter_map(|product| {
                let score = index.similarity(vector, product.id);
                (score >= self.config.semantic_threshold).then(|| MatchResult {
                    product: product.clone(),
                    score,
                    matched_via: MatchStage::Semantic,
                })
            })
            .collect()
    }

    /// Stage 2: token overlap against name, brand, category, and tags.
    fn keyword_stage(&self, query: &Query, catalog: &Catalog) -> Vec<MatchResult> {
        if query.tokens.is_empty() {
            return Vec::new();
        }
        let query_len = query.tokens.len() as f32;

        catalog
            .iter()
            .filter_map(|product| {
                let product_terms: AHashSet<String> = self
                    .normalizer
                    .normalize(&product.keyword_text())
                    .into_iter()
                    .collect();
                let overlap = query
                    .tokens
                    .iter()
                    .filter(|token| product_terms.contains(token.as_str()))
                    .count();
                (overlap > 0).then(|| MatchResult {
                    product: product.clone(),
                    score: (overlap as f32 / query_len).clamp(0.0, 1.0),
                    matched_via: MatchStage::Keyword,
                })
            })
            .collect()
    }

    /// Stage 3: exact category name match, uniform score.
    fn category_stage(
        &self,
        query: &Query,
        catalog: &Catalog,
        index: &CatalogIndex,
    ) -> Vec<MatchResult> {
        let Some(category) = query
            .tokens
            .iter()
            .find_map(|token| index.category_for_term(token))
        else {
            return Vec::new();
        };

        catalog
            .iter()
            .filter(|product| product.category.eq_ignore_ascii_case(category))
            .map(|product| MatchResult {
                product: product.clone(),
                score: 1.0,
                matched_via: MatchStage::Category,
            })
            .collect()
    }

    /// Stage 4: first `top_n` products by ascending id, score zero.
    fn default_stage(&self, catalog: &Catalog, top_n: usize) -> Vec<MatchResult> {
        let mut products: Vec<&Product> = catalog.iter().collect();
        products.sort_by_key(|p| p.id);
        products
            .into_iter()
            .take(top_n)
            .map(|product| MatchResult {
                product: product.clone(),
                score: 0.0,
                matched_via: MatchStage::Default,
            })
            .collect()
    }
}

/// Sort by score descending, ties by ascending product id, and truncate.
fn finish(mut results: Vec<MatchResult>, top_n: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.product.id.cmp(&b.product.id))
    });
    results.truncate(top_n);
    results
}
