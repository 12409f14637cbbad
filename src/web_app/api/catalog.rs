// web_app/api/catalog.rs - Product catalog store
//
// The catalog document is read from disk once at startup and kept in a
// process-wide OnceLock. Tests can swap in their own products.

use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::web_app::error::{Result, StorefrontError};
use crate::web_app::model::Product;

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
static TEST_CATALOG_OVERRIDE: Mutex<Option<Vec<Product>>> = Mutex::new(None);

/// Parse a `{"products": [...]}` document
pub fn parse_catalog(json: &str) -> Result<Vec<Product>> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    let products = document
        .get("products")
        .filter(|p| p.is_array())
        .ok_or(StorefrontError::MissingProducts)?;

    Ok(serde_json::from_value(products.clone())?)
}

/// Read and parse the catalog file
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    let path = path.as_ref();
    tracing::info!("Loading catalog from {}", path.display());

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorefrontError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

    let products = parse_catalog(&json)?;
    tracing::info!("Catalog loaded with {} products", products.len());
    Ok(products)
}

/// Install the global catalog
pub fn init_catalog(products: Vec<Product>) {
    if CATALOG.set(products).is_err() {
        tracing::warn!("Catalog already initialized");
    }
}

/// Set a catalog override for testing
pub fn set_test_catalog(products: Vec<Product>) {
    let mut guard = TEST_CATALOG_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(products);
}

/// Current catalog, test override first
pub fn get_catalog() -> Result<Vec<Product>> {
    {
        let guard = TEST_CATALOG_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(ref products) = *guard {
            return Ok(products.clone());
        }
    }

    CATALOG.get().cloned().ok_or(StorefrontError::CatalogUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_requires_products_array() {
        assert!(matches!(
            parse_catalog(r#"{"items": []}"#),
            Err(StorefrontError::MissingProducts)
        ));
        assert!(matches!(
            parse_catalog(r#"{"products": {}}"#),
            Err(StorefrontError::MissingProducts)
        ));
        assert!(matches!(
            parse_catalog("not json"),
            Err(StorefrontError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_parse_empty_catalog() {
        let products = parse_catalog(r#"{"products": []}"#).unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_catalog("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, StorefrontError::CatalogRead { .. }));
    }
}
