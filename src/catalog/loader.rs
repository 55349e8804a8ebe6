//! Catalog loading.
//!
//! Catalogs are JSON arrays of product records. Loading is the only
//! fallible startup step: an unreadable or unparseable source is an error
//! (the process must not serve without a usable catalog), while individual
//! malformed records are skipped with a warning and loading continues.
//!
//! # Examples
//!
//! ```
//! use bazaar::catalog::loader;
//!
//! let catalog = loader::from_json(r#"[
//!     {"id": 1, "name": "Yoga Mat", "description": "Non-slip mat",
//!      "category": "sports", "brand": "Lululemon", "price": 49.99,
//!      "image_url": "", "tags": ["yoga", "fitness"]}
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::product::{Product, RawProduct};
use crate::catalog::Catalog;
use crate::error::{BazaarError, Result};

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BazaarError::catalog(format!("cannot open catalog file {}: {e}", path.display()))
    })?;
    let catalog = from_reader(BufReader::new(file))?;
    info!(
        products = catalog.len(),
        path = %path.display(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Load a catalog from any reader producing a JSON array of products.
pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let raw: Vec<RawProduct> = serde_json::from_reader(reader)
        .map_err(|e| BazaarError::catalog(format!("catalog is not a JSON product array: {e}")))?;
    Ok(validate_all(raw))
}

/// Load a catalog from a JSON string.
pub fn from_json(json: &str) -> Result<Catalog> {
    let raw: Vec<RawProduct> = serde_json::from_str(json)
        .map_err(|e| BazaarError::catalog(format!("catalog is not a JSON product array: {e}")))?;
    Ok(validate_all(raw))
}

/// Validate raw records, skipping malformed ones.
fn validate_all(raw: Vec<RawProduct>) -> Catalog {
    let mut products = Vec::with_capacity(raw.len());
    for (position, record) in raw.into_iter().enumerate() {
        match record.validate() {
            Ok(product) => products.push(product),
            Err(reason) => {
                warn!(position, reason, "skipping malformed product record");
            }
        }
    }
    Catalog::new(products)
}

/// Build the built-in sample catalog.
///
/// Ten diverse demo products covering sports, clothing, electronics, and
/// home. Used by the CLI when no catalog file is given, and by tests.
pub fn sample_catalog() -> Catalog {
    let products = vec![
        Product {
            id: 1,
            name: "Nike Air Max Running Shoes".to_string(),
            description: "Premium running shoes with advanced cushioning technology, perfect for \
                          long-distance running and daily workouts. Features breathable mesh upper \
                          and responsive foam midsole."
                .to_string(),
            price: 129.99,
            category: "sports".to_string(),
            brand: "Nike".to_string(),
            image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400"
                .to_string(),
            tags: tags(&["running", "athletic", "shoes", "sports", "workout"]),
        },
        Product {
            id: 2,
            name: "Adidas Performance T-Shirt".to_string(),
            description: "High-performance sports t-shirt made from moisture-wicking fabric. Ideal \
                          for gym workouts, running, and athletic activities. Available in \
                          multiple colors."
                .to_string(),
            price: 34.99,
            category: "clothing".to_string(),
            brand: "Adidas".to_string(),
            image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400"
                .to_string(),
            tags: tags(&["t-shirt", "sports", "athletic", "workout", "gym"]),
        },
        Product {
            id: 3,
            name: "Premium Yoga Mat".to_string(),
            description: "Non-slip yoga mat with excellent grip and cushioning. Perfect for yoga, \
                          pilates, and meditation. Made from eco-friendly materials."
                .to_string(),
            price: 49.99,
            category: "sports".to_string(),
            brand: "Lululemon".to_string(),
            image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400"
                .to_string(),
            tags: tags(&["yoga", "mat", "fitness", "meditation", "pilates"]),
        },
        Product {
            id: 4,
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "High-quality wireless headphones with noise cancellation. Perfect for \
                          workouts, commuting, and music listening. Long battery life and \
                          comfortable fit."
                .to_string(),
            price: 89.99,
            category: "electronics".to_string(),
            brand: "Sony".to_string(),
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400"
                .to_string(),
            tags: tags(&["headphones", "wireless", "bluetooth", "music", "audio"]),
        },
        Product {
            id: 5,
            name: "Casual Denim Jacket".to_string(),
            description: "Classic denim jacket with modern styling. Versatile design suitable for \
                          casual and semi-formal occasions. Comfortable fit with multiple pockets."
                .to_string(),
            price: 79.99,
            category: "clothing".to_string(),
            brand: "Levi's".to_string(),
            image_url: "https://images.unsplash.com/photo-1576995853123-5a10305d93c0?w=400"
                .to_string(),
            tags: tags(&["jacket", "denim", "casual", "fashion", "outerwear"]),
        },
        Product {
            id: 6,
            name: "Smart Fitness Watch".to_string(),
            description: "Advanced fitness tracking watch with heart rate monitoring, GPS, and \
                          sleep tracking. Water-resistant and compatible with smartphones."
                .to_string(),
            price: 199.99,
            category: "electronics".to_string(),
            brand: "Fitbit".to_string(),
            image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400"
                .to_string(),
            tags: tags(&["watch", "fitness", "smartwatch", "tracking", "health"]),
        },
        Product {
            id: 7,
            name: "Organic Cotton Hoodie".to_string(),
            description: "Comfortable hoodie made from 100% organic cotton. Perfect for casual \
                          wear and light outdoor activities. Sustainable and eco-friendly."
                .to_string(),
            price: 59.99,
            category: "clothing".to_string(),
            brand: "Patagonia".to_string(),
            image_url: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400"
                .to_string(),
            tags: tags(&["hoodie", "cotton", "casual", "organic", "sustainable"]),
        },
        Product {
            id: 8,
            name: "Portable Bluetooth Speaker".to_string(),
            description: "Compact wireless speaker with impressive sound quality. Waterproof \
                          design perfect for outdoor activities, parties, and travel."
                .to_string(),
            price: 69.99,
            category: "electronics".to_string(),
            brand: "JBL".to_string(),
            image_url: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400"
                .to_string(),
            tags: tags(&["speaker", "bluetooth", "portable", "wireless", "audio"]),
        },
        Product {
            id: 9,
            name: "Professional Camera Lens".to_string(),
            description: "High-quality camera lens for professional photography. Excellent image \
                          quality with wide aperture for beautiful bokeh effects."
                .to_string(),
            price: 299.99,
            category: "electronics".to_string(),
            brand: "Canon".to_string(),
            image_url: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=400"
                .to_string(),
            tags: tags(&["camera", "lens", "photography", "professional", "optical"]),
        },
        Product {
            id: 10,
            name: "Eco-Friendly Water Bottle".to_string(),
            description: "Reusable water bottle made from sustainable materials. Keeps drinks cold \
                          for 24 hours and hot for 12 hours. Perfect for daily use."
                .to_string(),
            price: 24.99,
            category: "home".to_string(),
            brand: "Hydro Flask".to_string(),
            image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400"
                .to_string(),
            tags: tags(&["water bottle", "reusable", "eco-friendly", "sustainable", "insulated"]),
        },
    ];

    Catalog::new(products)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_catalog() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.get(3).unwrap().category, "sports");
    }

    #[test]
    fn test_from_json_skips_malformed() {
        let catalog = from_json(
            r#"[
                {"id": 1, "name": "Good", "description": "fine product"},
                {"name": "No id", "description": "broken"},
                {"id": 3, "description": "no name"},
                {"id": 4, "name": "Also Good", "description": "fine too"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(1).is_some());
        assert!(catalog.get(4).is_some());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(from_json(r#"{"not": "an array"}"#).is_err());
        assert!(from_json("garbage").is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Mat", "description": "A yoga mat", "price": 10.0}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().price, 10.0);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        assert!(load_catalog("/definitely/not/here.json").is_err());
    }
}
