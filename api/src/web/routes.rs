// catalog/api/src/web/routes.rs

use actix_cors::Cors;
use actix_web::{error, web, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, seed_handlers};

pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// Browser clients may call the API from any origin.
pub fn cors() -> Cors {
  Cors::default()
    .allow_any_origin()
    .send_wildcard()
    .allow_any_method()
    .allow_any_header()
    .max_age(3600)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
  warn!("Rejected request body: {}", err);
  AppError::Validation(INVALID_BODY_MESSAGE.to_string()).into()
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(web::JsonConfig::default().error_handler(json_error_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{id}", web::get().to(product_handlers::get_product_handler)),
      )
      .route("/seed", web::get().to(seed_handlers::seed_handler)),
  );
}
