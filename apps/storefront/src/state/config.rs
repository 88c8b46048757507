//! # Configuration State
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BLVD_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use blvd_core::{CoreError, MAX_ITEM_QUANTITY};
use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (shown as the page header)
    pub store_name: String,

    /// Support contact shown on the cart view
    pub support_email: String,

    /// JSON seed catalog. `None` uses the built-in product list.
    pub catalog_path: Option<PathBuf>,

    /// Upper bound for the quantity of one cart item
    pub max_item_quantity: i64,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "BLVD SAINT® Streetwear"
    /// - Catalog: built-in three-product list
    /// - Quantity cap: 10
    fn default() -> Self {
        StoreConfig {
            store_name: "BLVD SAINT® Streetwear".to_string(),
            support_email: "support@blvdsaint.example".to_string(),
            catalog_path: None,
            max_item_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BLVD_STORE_NAME`: Override store name
    /// - `BLVD_SUPPORT_EMAIL`: Override support contact
    /// - `BLVD_CATALOG_PATH`: Load the catalog from a JSON seed file
    /// - `BLVD_MAX_ITEM_QUANTITY`: Override the quantity cap (>= 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("BLVD_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(support_email) = lookup("BLVD_SUPPORT_EMAIL") {
            if !support_email.contains('@') {
                return Err(ConfigError::InvalidValue("BLVD_SUPPORT_EMAIL".to_string()));
            }
            config.support_email = support_email;
        }

        if let Some(path) = lookup("BLVD_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(max) = lookup("BLVD_MAX_ITEM_QUANTITY") {
            config.max_item_quantity = max
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|max| *max >= 1)
                .ok_or_else(|| ConfigError::InvalidValue("BLVD_MAX_ITEM_QUANTITY".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.max_item_quantity, MAX_ITEM_QUANTITY);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("BLVD_STORE_NAME", "Pop-up"),
            ("BLVD_SUPPORT_EMAIL", "help@shop.example"),
            ("BLVD_CATALOG_PATH", "/tmp/catalog.json"),
            ("BLVD_MAX_ITEM_QUANTITY", "1"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Pop-up");
        assert_eq!(config.support_email, "help@shop.example");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.max_item_quantity, 1);
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("BLVD_MAX_ITEM_QUANTITY", "0"),
            ("BLVD_MAX_ITEM_QUANTITY", "lots"),
            ("BLVD_SUPPORT_EMAIL", "nobody"),
        ] {
            let err = StoreConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref k) if k == key));
        }
    }
}
