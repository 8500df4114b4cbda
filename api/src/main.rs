// catalog/api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // catalog_api::web holds the routes
use catalog::ensure_seeded;
use catalog_api::config::AppConfig;
use catalog_api::db::SqliteProductStore;
use catalog_api::state::AppState;
use catalog_api::telemetry::{init_tracing, LogFormat};
use catalog_api::web;
use std::sync::Arc;

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
  tracing::error!(error = %err, "{}", context);
  std::io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();
  init_tracing(LogFormat::from_env());

  tracing::info!("Starting product catalog server...");

  let app_config =
    Arc::new(AppConfig::from_env().map_err(|e| startup_error("Failed to load application configuration", e))?);

  let store = SqliteProductStore::connect(&app_config.database_url, app_config.database_max_connections)
    .await
    .map_err(|e| startup_error("Failed to connect to the database", e))?;
  store
    .ensure_schema()
    .await
    .map_err(|e| startup_error("Failed to create the product table", e))?;

  let app_state = AppState::new(Arc::new(store));

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let factory_state = app_state.clone();
  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(factory_state.clone())) // Share AppState with handlers
      .wrap(web::cors())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?;

  tracing::info!("Server running on http://{}", server_address);

  // Seed failures are logged inside and never stop startup.
  if app_config.seed_on_startup {
    ensure_seeded(app_state.store.as_ref()).await;
  }

  server.run().await
}
