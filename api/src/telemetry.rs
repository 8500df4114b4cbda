// catalog/api/src/telemetry.rs

use std::str::FromStr;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(format!("unknown log format '{}'", other)),
    }
  }
}

impl LogFormat {
  /// Reads `LOG_FORMAT`, falling back to pretty output when unset or unrecognised.
  pub fn from_env() -> Self {
    std::env::var("LOG_FORMAT")
      .ok()
      .and_then(|v| v.parse().ok())
      .unwrap_or_default()
  }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(format: LogFormat) {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let result = match format {
    LogFormat::Pretty => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
  if let Err(e) = result {
    eprintln!("Tracing subscriber already installed: {}", e);
  }
}
