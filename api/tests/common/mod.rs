// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, NewProduct, Product, ProductFilter, ProductStore};
use once_cell::sync::Lazy;
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

/// Builds the routed app around `$store` (an `Arc<dyn ProductStore>`) as a test service.
macro_rules! catalog_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(catalog_api::state::AppState::new($store)))
        .wrap(catalog_api::web::cors())
        .configure(catalog_api::web::configure_app_routes),
    )
    .await
  };
}

/// A store whose every operation fails, as if the database were unreachable.
pub struct UnreachableStore;

fn unreachable(operation: &'static str) -> CatalogError {
  CatalogError::store(operation, std::io::Error::other("connection refused: 10.0.0.5:5432"))
}

#[async_trait]
impl ProductStore for UnreachableStore {
  async fn count(&self) -> CatalogResult<i64> {
    Err(unreachable("count"))
  }

  async fn find_many(&self, _filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    Err(unreachable("find_many"))
  }

  async fn find_unique(&self, _id: i64) -> CatalogResult<Option<Product>> {
    Err(unreachable("find_unique"))
  }

  async fn create(&self, _record: NewProduct) -> CatalogResult<Product> {
    Err(unreachable("create"))
  }
}
