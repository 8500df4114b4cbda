// tests/seed_tests.rs
mod common;

use catalog::{ensure_seeded, sample_products, InMemoryProductStore, ProductFilter, ProductStore, SeedOutcome};
use common::*;

#[tokio::test]
async fn test_seed_fills_empty_store_in_order() {
  setup_tracing();
  let store = InMemoryProductStore::new();

  let outcome = ensure_seeded(&store).await;
  assert_eq!(outcome, SeedOutcome::Seeded(3));
  assert_eq!(store.count().await.unwrap(), 3);

  let rows = store.find_many(&ProductFilter::all()).await.unwrap();
  let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["Running Shoes", "Gaming Headset", "Cotton Hoodie"]);
  let ids: Vec<i64> = rows.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![1, 2, 3]);

  let headset = &rows[1];
  assert!(!headset.is_in_stock);
  assert_eq!(headset.variants, "[\"Black\",\"White\"]");
}

#[tokio::test]
async fn test_seed_is_idempotent() {
  setup_tracing();
  let store = InMemoryProductStore::new();

  ensure_seeded(&store).await;
  let second = ensure_seeded(&store).await;
  assert_eq!(second, SeedOutcome::AlreadySeeded(3));
  assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_seed_skips_store_with_foreign_rows() {
  setup_tracing();
  let store = InMemoryProductStore::new();
  store.create(new_product("Desk", "Furniture", &[])).await.unwrap();

  assert_eq!(ensure_seeded(&store).await, SeedOutcome::AlreadySeeded(1));
  assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_seed_swallows_count_failure() {
  setup_tracing();
  let store = FlakyStore::failing_count();

  let outcome = ensure_seeded(&store).await;
  assert_eq!(outcome, SeedOutcome::Failed { inserted: 0 });
  assert_eq!(store.inner.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_seed_stops_at_first_insert_failure() {
  setup_tracing();
  let store = FlakyStore::failing_create_after(1);

  let outcome = ensure_seeded(&store).await;
  assert_eq!(outcome, SeedOutcome::Failed { inserted: 1 });
  // Sequential inserts: nothing after the failing row is attempted.
  assert_eq!(store.create_calls.load(std::sync::atomic::Ordering::SeqCst), 2);
  let rows = store.inner.find_many(&ProductFilter::all()).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "Running Shoes");
}

#[test]
fn test_sample_products_are_valid_records() {
  let samples = sample_products();
  assert_eq!(samples.len(), 3);
  for sample in &samples {
    assert!(!sample.name.is_empty());
    assert!(sample.price > 0.0);
    let decoded: Vec<String> = serde_json::from_str(&sample.variants).unwrap();
    assert!(!decoded.is_empty());
  }
  assert_eq!(samples.iter().filter(|p| p.category == "Apparel").count(), 2);
}
