// catalog/api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{CatalogResult, CreateProductPayload, Product, ProductFilter, ProductView};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch products";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching product";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const CREATE_FAILED_MESSAGE: &str = "Creation failed";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
  pub category: Option<String>,
}

impl ListProductsQuery {
  /// Collects the raw query pairs. A repeated `category` key is joined with `,` into a
  /// single filter value rather than rejected.
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let categories: Vec<String> = pairs
      .into_iter()
      .filter(|(key, _)| key == "category")
      .map(|(_, value)| value)
      .collect();
    Self {
      category: (!categories.is_empty()).then(|| categories.join(",")),
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state, query_pairs))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  let query = ListProductsQuery::from_pairs(query_pairs.into_inner());
  info!(category = ?query.category, "Listing products.");
  let filter = ProductFilter::by_category(query.category);

  let products = app_state.store.find_many(&filter).await.map_err(|e| {
    error!("Failed to fetch products from the store: {}", e);
    AppError::catalog(LIST_FAILED_MESSAGE, e)
  })?;

  let views = products
    .into_iter()
    .map(Product::into_view)
    .collect::<CatalogResult<Vec<ProductView>>>()
    .map_err(|e| {
      error!("Failed to decode stored product variants: {}", e);
      AppError::catalog(LIST_FAILED_MESSAGE, e)
    })?;

  info!("Successfully fetched {} products.", views.len());
  Ok(HttpResponse::Ok().json(views))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(raw_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();

  // An id that is not an integer can never match a row.
  let Some(product_id) = coerce_id(&raw_id) else {
    warn!("Product id '{}' is not an integer; nothing can match.", raw_id);
    return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
  };

  let product_opt = app_state.store.find_unique(product_id).await.map_err(|e| {
    error!("Store error while fetching product {}: {}", product_id, e);
    AppError::catalog(FETCH_FAILED_MESSAGE, e)
  })?;

  match product_opt {
    Some(product) => {
      let view = product.into_view().map_err(|e| {
        error!("Failed to decode variants of product {}: {}", product_id, e);
        AppError::catalog(FETCH_FAILED_MESSAGE, e)
      })?;
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(view))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
  }
}

/// Responds with the row exactly as stored, so `variants` is JSON text here, unlike the
/// read endpoints.
#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let record = CreateProductPayload::from_body(req_payload.into_inner())
    .into_new_product()
    .map_err(|e| {
      warn!("Rejected create-product payload: {}", e);
      AppError::catalog(CREATE_FAILED_MESSAGE, e)
    })?;

  let created = app_state.store.create(record).await.map_err(|e| {
    error!("Failed to insert product: {}", e);
    AppError::catalog(CREATE_FAILED_MESSAGE, e)
  })?;

  info!(product_id = created.id, "Product created.");
  Ok(HttpResponse::Created().json(created))
}

/// Converts a path segment to an id using number-from-text rules: surrounding whitespace
/// is ignored, empty text is zero, and `0x`/`0o`/`0b` prefixes and exponents are allowed.
/// Returns `None` for anything that is not an integral value in `i64` range.
pub fn coerce_id(raw: &str) -> Option<i64> {
  let text = raw.trim();
  if text.is_empty() {
    return Some(0);
  }

  for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
    if let Some(digits) = text.strip_prefix(prefix) {
      if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
      }
      return i64::from_str_radix(digits, radix).ok();
    }
  }

  // Rejects the words Rust would otherwise accept ("inf", "NaN").
  if !text
    .bytes()
    .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
  {
    return None;
  }

  let value = text.parse::<f64>().ok()?;
  if value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
    Some(value as i64)
  } else {
    None
  }
}
