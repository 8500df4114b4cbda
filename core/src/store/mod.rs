// catalog/src/store/mod.rs

//! The persistence seam. Handlers and the seeder only ever talk to a `ProductStore`,
//! so the backing engine (SQL pool, in-memory map, test double) is chosen by whoever
//! constructs the application state.

pub mod memory;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::product::{NewProduct, Product, ProductFilter};

pub use memory::InMemoryProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Total number of product rows.
  async fn count(&self) -> CatalogResult<i64>;

  /// All rows matching `filter`, in ascending id order.
  async fn find_many(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>>;

  async fn find_unique(&self, id: i64) -> CatalogResult<Option<Product>>;

  /// Inserts one row and returns it as stored, with its assigned id.
  async fn create(&self, record: NewProduct) -> CatalogResult<Product>;
}
