//! HTTP server assembly for the AWCH submissions backend.
//!
//! Wraps the [`awch_api`] router with the cross-cutting layers (CORS,
//! request tracing, request timeout) and the root banner route.

use std::{path::{Path, PathBuf}, sync::Arc, time::Duration};

use awch_core::store::SubmissionStore;
use axum::{Router, http::StatusCode, routing::get};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `AWCH_*`
/// environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  /// SQLite file path; `:memory:` keeps everything in memory.
  pub store_path:           PathBuf,
  pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "0.0.0.0".to_string(),
      port:                 5000,
      store_path:           PathBuf::from("awch.sqlite3"),
      request_timeout_secs: 30,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs)
  }
}

/// Layer the optional TOML file at `path` under `AWCH_*` environment
/// variables. A plain `PORT` variable, as set by most hosting platforms, is
/// used when neither the file nor `AWCH_PORT` names a port.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  build_config(path, std::env::var("PORT").ok())
}

fn build_config(
  path: &Path,
  fallback_port: Option<String>,
) -> Result<ServerConfig, config::ConfigError> {
  let mut builder = config::Config::builder();
  if let Some(port) = fallback_port {
    builder = builder.set_default("port", port)?;
  }
  builder
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("AWCH").try_parsing(true))
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

const BANNER: &str = "AWCH Backend API";

/// Build the full application router around `store`.
pub fn router<S>(store: Arc<S>, request_timeout: Duration) -> Router
where
  S: SubmissionStore + 'static,
{
  Router::new()
    .route("/", get(|| async { BANNER }))
    .nest("/api", awch_api::api_router(store))
    .layer(TimeoutLayer::with_status_code(
      StatusCode::REQUEST_TIMEOUT,
      request_timeout,
    ))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}
