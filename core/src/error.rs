// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// The creation payload was rejected before reaching the store.
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Store operation '{operation}' failed. Source: {source}")]
  Store {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },

  /// A stored `variants` column did not hold a JSON array of strings.
  #[error("Stored variants for product {product_id} are not a JSON string array: {source}")]
  CorruptVariants {
    product_id: i64,
    #[source]
    source: serde_json::Error,
  },
}

impl CatalogError {
  pub fn validation(message: impl Into<String>) -> Self {
    CatalogError::Validation(message.into())
  }

  /// Wraps any store backend failure, tagging it with the operation that failed.
  pub fn store<E>(operation: &'static str, err: E) -> Self
  where
    E: Into<AnyhowError>,
  {
    CatalogError::Store {
      operation,
      source: err.into(),
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
