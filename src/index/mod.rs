//! Catalog vector-space index.
//!
//! The [`CatalogIndex`] is a term-weighted (TF-IDF) vector space over all
//! products, built exactly once at startup and immutable afterwards.
//! Because nothing mutates after [`CatalogIndex::build`], arbitrarily many
//! request threads can read it concurrently without locking; a catalog
//! update means building a new index and swapping the reference.
//!
//! Term weights use smoothed inverse document frequency
//! `ln((1 + n) / (1 + df))`: a term occurring in every product weighs
//! near zero, a rare term weighs high. Vectors are L2-normalized at build
//! time, so cosine similarity between two vectors reduces to a dot
//! product.
//!
//! # Examples
//!
//! ```
//! use bazaar::analysis::Normalizer;
//! use bazaar::catalog::loader;
//! use bazaar::index::CatalogIndex;
//!
//! let normalizer = Normalizer::new();
//! let catalog = loader::sample_catalog();
//! let index = CatalogIndex::build(&catalog, &normalizer);
//!
//! assert_eq!(index.doc_count(), 10);
//! assert!(index.vocabulary_size() > 0);
//! ```

use ahash::AHashMap;
use tracing::info;

use crate::analysis::Normalizer;
use crate::catalog::Catalog;

/// An immutable TF-IDF vector space over a catalog.
///
/// Holds the shared vocabulary (term → dense column index), the per-column
/// IDF weights, one unit-norm vector per product, and a map from
/// normalized category terms to their canonical category labels (used by
/// the category fallback stage).
///
/// A degenerate catalog (zero products, or no product text surviving
/// normalization) produces an index with an empty vocabulary and an empty
/// vector map. That is a valid state, not an error.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    /// Term → column index into every vector.
    vocabulary: AHashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f32>,
    /// Product id → L2-normalized TF-IDF vector.
    vectors: AHashMap<u64, Vec<f32>>,
    /// Normalized category term → canonical category label.
    categories: AHashMap<String, String>,
    /// Number of products indexed.
    doc_count: usize,
}

impl CatalogIndex {
    /// Build the index from a catalog. Invoked once at startup.
    pub fn build(catalog: &Catalog, normalizer: &Normalizer) -> Self {
        let doc_count = catalog.len();

        // Tokenize every product once; collect document frequencies.
        let mut doc_tokens: Vec<(u64, Vec<String>)> = Vec::with_capacity(doc_count);
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        for product in catalog.iter() {
            let tokens = normalizer.normalize(&product.index_text());
            let mut seen: Vec<&String> = Vec::new();
            for token in &tokens {
                if !seen.contains(&token) {
                    seen.push(token);
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
            doc_tokens.push((product.id, tokens));
        }

        // Vocabulary column order is sorted-term order, so builds are
        // deterministic regardless of hash seeding.
        let mut terms: Vec<String> = document_frequency.keys().cloned().collect();
        terms.sort_unstable();

        let mut vocabulary = AHashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        let n = doc_count as f32;
        for (column, term) in terms.into_iter().enumerate() {
            let df = document_frequency[&term] as f32;
            idf.push(((1.0 + n) / (1.0 + df)).ln());
            vocabulary.insert(term, column);
        }

        // Assemble one unit-norm TF-IDF vector per product.
        let mut vectors = AHashMap::with_capacity(doc_count);
        for (id, tokens) in doc_tokens {
            if let Some(vector) = weigh_and_normalize(&tokens, &vocabulary, &idf) {
                vectors.insert(id, vector);
            }
        }

        // Category lookup in normalized term space, so a stemmed query
        // token ("sport") still hits the "sports" category.
        let mut categories = AHashMap::new();
        for product in catalog.iter() {
            if product.category.is_empty() {
                continue;
            }
            for term in normalizer.normalize(&product.category) {
                categories
                    .entry(term)
                    .or_insert_with(|| product.category.to_lowercase());
            }
        }

        info!(
            products = doc_count,
            vocabulary = vocabulary.len(),
            categories = categories.len(),
            "catalog index built"
        );

        CatalogIndex {
            vocabulary,
            idf,
            vectors,
            categories,
            doc_count,
        }
    }

    /// Project normalized query tokens into the index's vector space.
    ///
    /// Terms absent from the vocabulary contribute nothing. Returns `None`
    /// when no token lands in the vocabulary (a vocabulary miss — the
    /// caller falls through to the keyword stage).
    pub fn project(&self, tokens: &[String]) -> Option<Vec<f32>> {
        weigh_and_normalize(tokens, &self.vocabulary, &self.idf)
    }

    /// Cosine similarity between a projected query vector and a product's
    /// stored vector. Both sides are unit norm, so this is a dot product,
    /// clamped into [0, 1].
    pub fn similarity(&self, query_vector: &[f32], product_id: u64) -> f32 {
        match self.vectors.get(&product_id) {
            Some(vector) => dot(query_vector, vector).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// Iterate over (product id, vector) pairs.
    pub fn vectors(&self) -> impl Iterator<Item = (u64, &[f32])> {
        self.vectors.iter().map(|(&id, v)| (id, v.as_slice()))
    }

    /// Look up the canonical category for a normalized term, if the term
    /// names a known category.
    pub fn category_for_term(&self, term: &str) -> Option<&str> {
        self.categories.get(term).map(|s| s.as_str())
    }

    /// Number of terms in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of products indexed.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Whether the index has no vocabulary (degenerate catalog).
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Turn a token sequence into a unit-norm TF-IDF vector over `vocabulary`.
///
/// Returns `None` when nothing lands in the vocabulary or the weighted
/// vector has zero norm.
fn weigh_and_normalize(
    tokens: &[String],
    vocabulary: &AHashMap<String, usize>,
    idf: &[f32],
) -> Option<Vec<f32>> {
    if vocabulary.is_empty() || tokens.is_empty() {
        return None;
    }

    let mut vector = vec![0.0f32; idf.len()];
    let mut hit = false;
    for token in tokens {
        if let Some(&column) = vocabulary.get(token) {
            vector[column] += 1.0;
            hit = true;
        }
    }
    if !hit {
        return None;
    }

    for (value, weight) in vector.iter_mut().zip(idf.iter()) {
        *value *= weight;
    }

    let norm = dot(&vector, &vector).sqrt();
    if norm <= f32::EPSILON {
        return None;
    }
    for value in vector.iter_mut() {
        *value /= norm;
    }

    Some(vector)
}

/// Dot product of two equal-length vectors.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
