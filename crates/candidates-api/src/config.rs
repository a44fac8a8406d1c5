//! Runtime server configuration.
//!
//! Built once at startup from an optional TOML file layered under
//! `CANDIDATES_*` environment variables, then shared read-only through
//! [`AppState`](crate::AppState).

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use serde::Deserialize;

/// Origin the frontend dev server runs on; always allowed by CORS.
pub const DEV_FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:             String,
  #[serde(default = "default_port")]
  pub port:             u16,
  #[serde(default = "default_database_path")]
  pub database_path:    PathBuf,
  /// Shared secret expected in `X-API-Key` on `/external/*`. Empty means
  /// unconfigured, and the public surface answers 500 until it is set.
  #[serde(default)]
  pub external_api_key: String,
  #[serde(default = "default_frontend_url")]
  pub frontend_url:     String,
  #[serde(default = "default_query_timeout_ms")]
  pub query_timeout_ms: u64,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8000 }

fn default_database_path() -> PathBuf { PathBuf::from("candidates.db") }

fn default_frontend_url() -> String { DEV_FRONTEND_ORIGIN.to_string() }

fn default_query_timeout_ms() -> u64 { 5_000 }

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host:             default_host(),
      port:             default_port(),
      database_path:    default_database_path(),
      external_api_key: String::new(),
      frontend_url:     default_frontend_url(),
      query_timeout_ms: default_query_timeout_ms(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and overlay `CANDIDATES_*` env vars.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CANDIDATES"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn query_timeout(&self) -> Duration { Duration::from_millis(self.query_timeout_ms) }

  /// CORS origins: the configured frontend plus the local dev server.
  pub fn allowed_origins(&self) -> Vec<String> {
    let mut origins = vec![self.frontend_url.clone()];
    if self.frontend_url != DEV_FRONTEND_ORIGIN {
      origins.push(DEV_FRONTEND_ORIGIN.to_string());
    }
    origins
  }

  /// `database_path` with a leading `~` expanded to the user's home.
  pub fn resolved_database_path(&self) -> PathBuf { expand_tilde(&self.database_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
