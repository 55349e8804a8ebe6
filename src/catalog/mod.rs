//! Product catalog: the immutable product list the engine matches against.
//!
//! A [`Catalog`] is loaded once at startup (see [`loader`]) and never
//! mutated afterwards. Catalog updates mean loading a new catalog,
//! building a new index, and swapping the references.

pub mod loader;
pub mod product;

pub use product::{Product, RawProduct};

use ahash::AHashSet;

/// An immutable, id-unique product list.
///
/// Construction deduplicates ids (first occurrence wins) so the invariant
/// that a product id appears at most once holds for every downstream
/// consumer.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list, keeping the first product for
    /// any duplicated id.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = AHashSet::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if seen.insert(product.id) {
                unique.push(product);
            } else {
                tracing::warn!(id = product.id, "duplicate product id, keeping first");
            }
        }
        Catalog { products: unique }
    }

    /// Create an empty catalog. Valid: matching against it yields empty
    /// results at every stage.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// All products, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over products.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}
