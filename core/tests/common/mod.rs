// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, InMemoryProductStore, NewProduct, Product, ProductFilter, ProductStore};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Store double that fails on demand ---

/// Wraps an in-memory store. `count` fails when `fail_count` is set; `create` fails once
/// `creates_before_failure` inserts have succeeded.
pub struct FlakyStore {
  pub inner: InMemoryProductStore,
  pub fail_count: bool,
  pub creates_before_failure: Option<usize>,
  pub create_calls: AtomicUsize,
}

impl FlakyStore {
  pub fn failing_count() -> Self {
    Self {
      inner: InMemoryProductStore::new(),
      fail_count: true,
      creates_before_failure: None,
      create_calls: AtomicUsize::new(0),
    }
  }

  pub fn failing_create_after(successes: usize) -> Self {
    Self {
      inner: InMemoryProductStore::new(),
      fail_count: false,
      creates_before_failure: Some(successes),
      create_calls: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl ProductStore for FlakyStore {
  async fn count(&self) -> CatalogResult<i64> {
    if self.fail_count {
      return Err(CatalogError::store("count", anyhow::anyhow!("simulated count failure")));
    }
    self.inner.count().await
  }

  async fn find_many(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    self.inner.find_many(filter).await
  }

  async fn find_unique(&self, id: i64) -> CatalogResult<Option<Product>> {
    self.inner.find_unique(id).await
  }

  async fn create(&self, record: NewProduct) -> CatalogResult<Product> {
    let call = self.create_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(limit) = self.creates_before_failure {
      if call >= limit {
        return Err(CatalogError::store("create", anyhow::anyhow!("simulated insert failure")));
      }
    }
    self.inner.create(record).await
  }
}

pub fn new_product(name: &str, category: &str, variants: &[&str]) -> NewProduct {
  let variants: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
  NewProduct::new(name, 10.0, category, catalog::PLACEHOLDER_IMAGE_URL, true, &variants)
}
