// catalog/src/seed.rs

//! Sample data for an empty catalog.
//!
//! `ensure_seeded` checks the row count and only inserts into an empty table, so calling
//! it repeatedly is harmless. Rows are inserted one at a time, each awaited before the
//! next, which keeps ids in listing order and works on stores without bulk inserts.

use tracing::{error, info, instrument};

use crate::error::CatalogResult;
use crate::product::NewProduct;
use crate::store::ProductStore;

/// What a call to `ensure_seeded` ended up doing. Failures are reported here and logged,
/// never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
  /// The table was empty and this many rows were inserted.
  Seeded(usize),
  /// The table already held this many rows.
  AlreadySeeded(i64),
  /// Counting or inserting failed; `inserted` rows made it in before the failure.
  Failed { inserted: usize },
}

/// The fixed sample products, in insertion order.
pub fn sample_products() -> Vec<NewProduct> {
  vec![
    NewProduct::new(
      "Running Shoes",
      89.99,
      "Apparel",
      "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
      true,
      &strings(&["8", "9", "10"]),
    ),
    NewProduct::new(
      "Gaming Headset",
      199.99,
      "Electronics",
      "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
      false,
      &strings(&["Black", "White"]),
    ),
    NewProduct::new(
      "Cotton Hoodie",
      45.00,
      "Apparel",
      "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?w=500",
      true,
      &strings(&["S", "M", "L", "XL"]),
    ),
  ]
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// Seeds `store` with the sample products when it holds no rows.
#[instrument(name = "seed::ensure_seeded", skip(store))]
pub async fn ensure_seeded(store: &dyn ProductStore) -> SeedOutcome {
  let mut inserted = 0;
  match seed_if_empty(store, &mut inserted).await {
    Ok(outcome @ SeedOutcome::Seeded(n)) => {
      info!("Database seeded with {} sample products.", n);
      outcome
    }
    Ok(outcome) => {
      info!(?outcome, "Database already has data; skipping seed.");
      outcome
    }
    Err(e) => {
      error!(error = %e, inserted, "Seeding the product table failed.");
      SeedOutcome::Failed { inserted }
    }
  }
}

async fn seed_if_empty(store: &dyn ProductStore, inserted: &mut usize) -> CatalogResult<SeedOutcome> {
  let existing = store.count().await?;
  if existing != 0 {
    return Ok(SeedOutcome::AlreadySeeded(existing));
  }

  for record in sample_products() {
    let created = store.create(record).await?;
    tracing::debug!(product_id = created.id, name = %created.name, "Inserted sample product.");
    *inserted += 1;
  }
  Ok(SeedOutcome::Seeded(*inserted))
}
