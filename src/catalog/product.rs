//! Product record types.
//!
//! A [`Product`] is immutable once loaded. Catalog sources are parsed into
//! [`RawProduct`] first so that records with missing required fields can be
//! skipped individually instead of failing the whole load.

use serde::{Deserialize, Serialize};

/// A single catalog product.
///
/// Immutable after loading; every field is plain data. The `id` is unique
/// within a catalog and stable across the process lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Category label (e.g. "sports", "clothing", "electronics").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Non-negative price.
    pub price: f64,
    /// Image URL for the client surface; never inspected by matching.
    pub image_url: String,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Product {
    /// Concatenate every text field that participates in indexing.
    ///
    /// Name, description, tags, category, and brand together define the
    /// product's footprint in the vocabulary space.
    pub fn index_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.description.len() + self.category.len() + self.brand.len() + 32,
        );
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.description);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.push(' ');
        text.push_str(&self.category);
        text.push(' ');
        text.push_str(&self.brand);
        text
    }

    /// Concatenate the short fields used by the keyword fallback stage:
    /// name, brand, category, and tags (not the long description).
    pub fn keyword_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.brand);
        text.push(' ');
        text.push_str(&self.category);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text
    }
}

/// A leniently-parsed product record.
///
/// Every field is optional so a malformed record deserializes instead of
/// aborting the whole catalog. [`RawProduct::validate`] promotes it to a
/// [`Product`] or reports what is missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProduct {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RawProduct {
    /// Validate the raw record into a [`Product`].
    ///
    /// Required: `id`, `name`, `description`. A missing category, brand,
    /// image URL, or price falls back to an empty/zero value; a negative
    /// price is rejected.
    pub fn validate(self) -> std::result::Result<Product, String> {
        let id = self.id.ok_or("missing id")?;
        let name = self.name.ok_or("missing name")?;
        let description = self.description.ok_or("missing description")?;

        let price = self.price.unwrap_or(0.0);
        if price < 0.0 {
            return Err(format!("negative price {price}"));
        }

        Ok(Product {
            id,
            name,
            description,
            category: self.category.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            price,
            image_url: self.image_url.unwrap_or_default(),
            tags: self.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<u64>, name: Option<&str>, description: Option<&str>) -> RawProduct {
        RawProduct {
            id,
            name: name.map(String::from),
            description: description.map(String::from),
            ..RawProduct::default()
        }
    }

    #[test]
    fn test_validate_complete_record() {
        let product = raw(Some(1), Some("Yoga Mat"), Some("Non-slip mat"))
            .validate()
            .unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Yoga Mat");
        assert_eq!(product.price, 0.0);
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_validate_missing_fields() {
        assert!(raw(None, Some("x"), Some("y")).validate().is_err());
        assert!(raw(Some(1), None, Some("y")).validate().is_err());
        assert!(raw(Some(1), Some("x"), None).validate().is_err());
    }

    #[test]
    fn test_validate_negative_price() {
        let mut record = raw(Some(1), Some("x"), Some("y"));
        record.price = Some(-5.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_index_text_covers_all_fields() {
        let product = Product {
            id: 1,
            name: "Air Max".to_string(),
            description: "Running shoes".to_string(),
            category: "sports".to_string(),
            brand: "Nike".to_string(),
            price: 129.99,
            image_url: String::new(),
            tags: vec!["running".to_string(), "shoes".to_string()],
        };

        let text = product.index_text();
        assert!(text.contains("Air Max"));
        assert!(text.contains("Running shoes"));
        assert!(text.contains("sports"));
        assert!(text.contains("Nike"));
        assert!(text.contains("running"));
    }

    #[test]
    fn test_keyword_text_skips_description() {
        let product = Product {
            id: 1,
            name: "Air Max".to_string(),
            description: "cushioning technology".to_string(),
            category: "sports".to_string(),
            brand: "Nike".to_string(),
            price: 129.99,
            image_url: String::new(),
            tags: vec![],
        };

        let text = product.keyword_text();
        assert!(text.contains("Air Max"));
        assert!(!text.contains("cushioning"));
    }
}
