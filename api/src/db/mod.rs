// catalog/api/src/db/mod.rs

//! SQL-backed implementation of `catalog::ProductStore`.

pub mod sqlite_store;

pub use sqlite_store::SqliteProductStore;
