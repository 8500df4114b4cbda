// src/lib.rs

//! Catalog: the domain side of a small product catalog service.
//!
//! It provides:
//!  - `Product` rows as stored (variants as JSON text) and `ProductView` as read.
//!  - `CreateProductPayload`, which validates and coerces a create request into a `NewProduct`.
//!  - The `ProductStore` trait, the only way the service touches persistence.
//!  - `InMemoryProductStore`, a lock-backed store for tests and local runs.
//!  - `ensure_seeded`, which fills an empty store with sample products.

pub mod error;
pub mod payload;
pub mod product;
pub mod seed;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::payload::CreateProductPayload;
pub use crate::product::{NewProduct, Product, ProductFilter, ProductView, PLACEHOLDER_IMAGE_URL};
pub use crate::seed::{ensure_seeded, sample_products, SeedOutcome};
pub use crate::store::{InMemoryProductStore, ProductStore};
