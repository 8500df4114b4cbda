// catalog/api/src/web/handlers/seed_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::ensure_seeded;
use serde_json::json;
use tracing::{info, instrument};

use crate::state::AppState;

/// Returned whether or not rows were inserted; seed failures are only logged.
pub const SEED_MESSAGE: &str = "Database seed check complete.";

#[instrument(name = "handler::seed", skip(app_state))]
pub async fn seed_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let outcome = ensure_seeded(app_state.store.as_ref()).await;
  info!(?outcome, "Manual seed request finished.");
  HttpResponse::Ok().json(json!({ "message": SEED_MESSAGE }))
}
