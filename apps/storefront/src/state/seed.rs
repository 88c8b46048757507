//! # Seed Catalog
//!
//! Supplies the fixed product list the catalog is built from at startup.
//!
//! ## Sources
//! - Built-in list (default): the three launch products
//! - `BLVD_CATALOG_PATH`: a JSON array of product seeds
//!
//! ```json
//! [
//!   { "id": 1, "name": "Angel Tee", "pricePence": 2599,
//!     "description": "Premium cotton tee with Angel graphic.",
//!     "images": ["/blvd_saint_product_1.png", "/blvd_saint_product_2.png"] }
//! ]
//! ```

use std::fs;
use std::path::Path;

use blvd_core::{CatalogStore, ProductId, ProductSeed};
use tracing::info;

use super::config::{ConfigError, StoreConfig};

/// The launch product list.
pub fn default_seeds() -> Vec<ProductSeed> {
    vec![
        seed(
            1,
            "Angel Tee",
            "Premium cotton tee with Angel graphic.",
            2599,
            &["/blvd_saint_product_1.png", "/blvd_saint_product_2.png"],
        ),
        seed(
            2,
            "Where Is My Mind Hoodie",
            "Heavyweight premium hoodie.",
            5999,
            &["/blvd_saint_product_3.png", "/blvd_saint_product_4.png"],
        ),
        seed(
            3,
            "Duck Tee",
            "Soft cotton tee.",
            2599,
            &["/blvd_saint_product_5.png", "/blvd_saint_product_6.png"],
        ),
    ]
}

fn seed(id: u32, name: &str, description: &str, price_pence: i64, images: &[&str]) -> ProductSeed {
    ProductSeed {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price_pence,
        images: images.iter().map(|i| i.to_string()).collect(),
    }
}

/// Reads product seeds from a JSON file.
pub fn load_seeds(path: &Path) -> Result<Vec<ProductSeed>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the session catalog from the configured seed source.
pub fn build_catalog(config: &StoreConfig) -> Result<CatalogStore, ConfigError> {
    let seeds = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog seed file");
            load_seeds(path)?
        }
        None => default_seeds(),
    };

    Ok(CatalogStore::from_seeds(seeds)?)
}
