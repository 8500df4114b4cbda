// catalog/api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,

  // Run the sample-data seeder once the listener is bound
  pub seed_on_startup: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables take their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("SERVER_PORT", "4000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_or("DATABASE_URL", "sqlite://catalog.db?mode=rwc");
    let database_max_connections = get_or("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;
    if database_max_connections == 0 {
      return Err(AppError::Config("DATABASE_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let seed_on_startup = get_or("SEED_ON_STARTUP", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_ON_STARTUP value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      seed_on_startup,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.server_port, 4000);
    assert_eq!(cfg.server_address(), "0.0.0.0:4000");
    assert_eq!(cfg.database_url, "sqlite://catalog.db?mode=rwc");
    assert_eq!(cfg.database_max_connections, 5);
    assert!(cfg.seed_on_startup);
  }

  #[test]
  fn overrides_are_read() {
    let cfg = config_from(&[
      ("SERVER_HOST", "127.0.0.1"),
      ("SERVER_PORT", "8081"),
      ("DATABASE_URL", "sqlite::memory:"),
      ("SEED_ON_STARTUP", "false"),
    ])
    .unwrap();
    assert_eq!(cfg.server_address(), "127.0.0.1:8081");
    assert_eq!(cfg.database_url, "sqlite::memory:");
    assert!(!cfg.seed_on_startup);
  }

  #[test]
  fn invalid_values_are_config_errors() {
    assert!(matches!(config_from(&[("SERVER_PORT", "http")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("SEED_ON_STARTUP", "yes")]), Err(AppError::Config(_))));
    assert!(matches!(
      config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]),
      Err(AppError::Config(_))
    ));
  }
}
