// catalog/src/payload.rs

//! Validation of the create-product request body.
//!
//! Required fields are checked for *presence* the way a loosely typed client would
//! expect: empty strings, `0`, `false` and `null` all count as missing. So a price of
//! exactly zero is rejected as missing. Prices are parsed from their longest numeric
//! prefix, so `"12.5 USD"` is accepted as `12.5`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::product::{NewProduct, PLACEHOLDER_IMAGE_URL};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const INVALID_FIELD_TYPE_MESSAGE: &str = "Invalid field type";
pub const INVALID_PRICE_MESSAGE: &str = "Invalid price";

/// Raw create-product body. Every field is kept untyped until validation so that
/// falsy values can be told apart from well-typed ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
  #[serde(default)]
  pub name: Value,
  #[serde(default)]
  pub price: Value,
  #[serde(default)]
  pub category: Value,
  #[serde(default)]
  pub image: Value,
  #[serde(default)]
  pub is_in_stock: Value,
  #[serde(default)]
  pub variants: Value,
}

impl CreateProductPayload {
  /// Reads a payload from an arbitrary JSON body. Only object properties count as fields,
  /// so arrays and scalars yield an empty payload instead of being matched by position.
  pub fn from_body(body: Value) -> Self {
    match body {
      Value::Object(fields) => serde_json::from_value(Value::Object(fields)).unwrap_or_default(),
      _ => Self::default(),
    }
  }

  /// Applies presence checks, coercions and defaults, producing an insertable record.
  pub fn into_new_product(self) -> CatalogResult<NewProduct> {
    if !is_truthy(&self.name) || !is_truthy(&self.price) || !is_truthy(&self.category) {
      return Err(CatalogError::validation(MISSING_FIELDS_MESSAGE));
    }

    let name = expect_string(self.name)?;
    let category = expect_string(self.category)?;

    let price = coerce_price(&self.price).ok_or_else(|| CatalogError::validation(INVALID_PRICE_MESSAGE))?;

    let image = if is_truthy(&self.image) {
      expect_string(self.image)?
    } else {
      PLACEHOLDER_IMAGE_URL.to_string()
    };

    let is_in_stock = match self.is_in_stock {
      Value::Null => true,
      Value::Bool(flag) => flag,
      _ => return Err(CatalogError::validation(INVALID_FIELD_TYPE_MESSAGE)),
    };

    let variants = if is_truthy(&self.variants) {
      expect_string_list(self.variants)?
    } else {
      Vec::new()
    };

    Ok(NewProduct::new(name, price, category, image, is_in_stock, &variants))
  }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(flag) => *flag,
    Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

fn expect_string(value: Value) -> CatalogResult<String> {
  match value {
    Value::String(s) => Ok(s),
    _ => Err(CatalogError::validation(INVALID_FIELD_TYPE_MESSAGE)),
  }
}

fn expect_string_list(value: Value) -> CatalogResult<Vec<String>> {
  match value {
    Value::Array(items) => items.into_iter().map(expect_string).collect(),
    _ => Err(CatalogError::validation(INVALID_FIELD_TYPE_MESSAGE)),
  }
}

/// Numbers pass through; strings go through prefix parsing. Non-finite results are refused
/// since neither the store nor JSON can carry them.
fn coerce_price(value: &Value) -> Option<f64> {
  let price = match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => parse_float_prefix(s),
    _ => None,
  }?;
  price.is_finite().then_some(price)
}

/// Parses the longest leading decimal literal of `input`, after skipping leading
/// whitespace. Accepts an optional sign, a fraction, an exponent and `Infinity`.
/// Returns `None` when no digits lead the text.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
  let text = input.trim_start();
  let bytes = text.as_bytes();
  let mut end = 0;

  if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
    end += 1;
  }

  if text[end..].starts_with("Infinity") {
    return Some(if text.starts_with('-') {
      f64::NEG_INFINITY
    } else {
      f64::INFINITY
    });
  }

  let int_digits = count_digits(&bytes[end..]);
  end += int_digits;

  let mut frac_digits = 0;
  if bytes.get(end) == Some(&b'.') {
    frac_digits = count_digits(&bytes[end + 1..]);
    if int_digits > 0 || frac_digits > 0 {
      end += 1 + frac_digits;
    }
  }

  if int_digits == 0 && frac_digits == 0 {
    return None;
  }

  if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
    let mut exp_end = end + 1;
    if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
      exp_end += 1;
    }
    let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
    if exp_digits > 0 {
      end = exp_end + exp_digits;
    }
  }

  text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
  bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
