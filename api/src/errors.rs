// catalog/api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// A catalog operation failed. `public_message` is the only part the client sees.
  #[error("{public_message}: {source}")]
  Catalog {
    public_message: &'static str,
    #[source]
    source: CatalogError,
  },
}

impl AppError {
  /// Wraps a catalog error for a handler. Validation failures keep their own message and
  /// status; anything else is reported to the client as `public_message` only.
  pub fn catalog(public_message: &'static str, source: CatalogError) -> Self {
    match source {
      CatalogError::Validation(message) => AppError::Validation(message),
      source => AppError::Catalog { public_message, source },
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Catalog { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let message = match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.as_str(),
      AppError::Config(_) => "Configuration issue",
      AppError::Catalog { public_message, .. } => *public_message,
    };
    HttpResponse::build(self.status_code()).json(json!({ "error": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
