// catalog/api/src/db/sqlite_store.rs

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, NewProduct, Product, ProductFilter, ProductStore};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{info, instrument};

const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "Product" (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  price REAL NOT NULL,
  category TEXT NOT NULL,
  image TEXT NOT NULL,
  "isInStock" BOOLEAN NOT NULL DEFAULT 1,
  variants TEXT NOT NULL DEFAULT '[]'
)
"#;

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  price: f64,
  category: String,
  image: String,
  #[sqlx(rename = "isInStock")]
  is_in_stock: bool,
  variants: String,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      price: row.price,
      category: row.category,
      image: row.image,
      is_in_stock: row.is_in_stock,
      variants: row.variants,
    }
  }
}

/// `ProductStore` over a SQLite pool, using runtime-checked queries.
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
  pool: SqlitePool,
}

impl SqliteProductStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Opens a pool for `database_url`.
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
    let mut options = SqlitePoolOptions::new().max_connections(max_connections);
    if database_url.contains(":memory:") {
      // Each connection to :memory: is its own database; keep exactly one alive for the pool's lifetime.
      options = options.max_connections(1).min_connections(1).idle_timeout(None).max_lifetime(None);
    }
    let pool = options.connect(database_url).await?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  /// Creates the product table if it does not exist yet.
  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCT_TABLE).execute(&self.pool).await?;
    Ok(())
  }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
  #[instrument(name = "sqlite::count", skip(self), err)]
  async fn count(&self) -> CatalogResult<i64> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Product""#)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| CatalogError::store("count", e))
  }

  #[instrument(name = "sqlite::find_many", skip(self), err)]
  async fn find_many(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(
      r#"SELECT id, name, price, category, image, "isInStock", variants FROM "Product"
         WHERE (?1 IS NULL OR category = ?1)
         ORDER BY id ASC"#,
    )
    .bind(filter.category.as_deref())
    .fetch_all(&self.pool)
    .await
    .map_err(|e| CatalogError::store("find_many", e))?;

    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "sqlite::find_unique", skip(self), err)]
  async fn find_unique(&self, id: i64) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(
      r#"SELECT id, name, price, category, image, "isInStock", variants FROM "Product" WHERE id = ?1"#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| CatalogError::store("find_unique", e))?;

    Ok(row.map(Product::from))
  }

  #[instrument(name = "sqlite::create", skip(self, record), fields(name = %record.name), err)]
  async fn create(&self, record: NewProduct) -> CatalogResult<Product> {
    let row: ProductRow = sqlx::query_as(
      r#"INSERT INTO "Product" (name, price, category, image, "isInStock", variants)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING id, name, price, category, image, "isInStock", variants"#,
    )
    .bind(record.name)
    .bind(record.price)
    .bind(record.category)
    .bind(record.image)
    .bind(record.is_in_stock)
    .bind(record.variants)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| CatalogError::store("create", e))?;

    Ok(row.into())
  }
}
