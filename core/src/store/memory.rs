// catalog/src/store/memory.rs
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{event, Level};

use super::ProductStore;
use crate::error::CatalogResult;
use crate::product::{NewProduct, Product, ProductFilter};

#[derive(Debug, Default)]
struct Table {
  rows: Vec<Product>,
  last_id: i64,
}

/// A `ProductStore` held entirely in process memory. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
  table: RwLock<Table>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn count(&self) -> CatalogResult<i64> {
    Ok(self.table.read().rows.len() as i64)
  }

  async fn find_many(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    let table = self.table.read();
    Ok(table.rows.iter().filter(|p| filter.matches(p)).cloned().collect())
  }

  async fn find_unique(&self, id: i64) -> CatalogResult<Option<Product>> {
    Ok(self.table.read().rows.iter().find(|p| p.id == id).cloned())
  }

  async fn create(&self, record: NewProduct) -> CatalogResult<Product> {
    let mut table = self.table.write();
    table.last_id += 1;
    let product = record.with_id(table.last_id);
    table.rows.push(product.clone());
    event!(Level::DEBUG, product_id = product.id, "Inserted product into in-memory store.");
    Ok(product)
  }
}
