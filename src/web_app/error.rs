// web_app/error.rs - Storefront error type

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog document: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("catalog document is missing the 'products' array")]
    MissingProducts,

    #[error("catalog has not been loaded")]
    CatalogUnavailable,

    #[error("invalid user: {0}")]
    InvalidUser(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_read_message_names_path() {
        let err = StorefrontError::CatalogRead {
            path: PathBuf::from("data/products.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("data/products.json"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_parse_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: StorefrontError = parse.unwrap_err().into();
        assert!(matches!(err, StorefrontError::CatalogParse(_)));
    }
}
