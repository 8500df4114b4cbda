// catalog/src/product.rs

//! Product records in their two shapes: the stored row, where `variants` is JSON text,
//! and the read view, where `variants` is a list of strings.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Image used when a product is created without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300";

/// A product row exactly as the store holds it.
///
/// This is also the body of the create response, so `variants` goes out as the raw
/// JSON text (`"[\"X\"]"`) rather than an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub category: String,
  pub image: String,
  pub is_in_stock: bool,
  pub variants: String,
}

/// A product as returned by the read endpoints, with `variants` decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub category: String,
  pub image: String,
  pub is_in_stock: bool,
  pub variants: Vec<String>,
}

impl Product {
  /// Decodes the stored `variants` text.
  pub fn variant_list(&self) -> CatalogResult<Vec<String>> {
    serde_json::from_str(&self.variants).map_err(|source| CatalogError::CorruptVariants {
      product_id: self.id,
      source,
    })
  }

  pub fn into_view(self) -> CatalogResult<ProductView> {
    let variants = self.variant_list()?;
    Ok(ProductView {
      id: self.id,
      name: self.name,
      price: self.price,
      category: self.category,
      image: self.image,
      is_in_stock: self.is_in_stock,
      variants,
    })
  }
}

/// A validated record ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub category: String,
  pub image: String,
  pub is_in_stock: bool,
  pub variants: String,
}

impl NewProduct {
  /// Builds a record, encoding `variants` as JSON array text.
  pub fn new(
    name: impl Into<String>,
    price: f64,
    category: impl Into<String>,
    image: impl Into<String>,
    is_in_stock: bool,
    variants: &[String],
  ) -> Self {
    Self {
      name: name.into(),
      price,
      category: category.into(),
      image: image.into(),
      is_in_stock,
      variants: encode_variants(variants),
    }
  }

  /// Attaches a store-assigned id, producing the stored row.
  pub fn with_id(self, id: i64) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      category: self.category,
      image: self.image,
      is_in_stock: self.is_in_stock,
      variants: self.variants,
    }
  }
}

pub fn encode_variants(variants: &[String]) -> String {
  // A slice of strings always serializes.
  serde_json::to_string(variants).unwrap_or_else(|_| String::from("[]"))
}

/// Optional exact-match filter for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub category: Option<String>,
}

impl ProductFilter {
  pub fn all() -> Self {
    Self::default()
  }

  /// An empty category is treated as no filter at all.
  pub fn by_category(category: Option<String>) -> Self {
    Self {
      category: category.filter(|c| !c.is_empty()),
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    match &self.category {
      Some(category) => product.category == *category,
      None => true,
    }
  }
}
