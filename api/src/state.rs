// catalog/api/src/state.rs
use catalog::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }
}
