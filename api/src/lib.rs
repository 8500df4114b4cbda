// catalog/api/src/lib.rs

//! HTTP surface of the product catalog: actix-web routes over a `catalog::ProductStore`,
//! with a SQLite-backed store for production use.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;
