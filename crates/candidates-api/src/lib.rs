//! HTTP surface for the candidate directory.
//!
//! Two read-only views over one [`CandidateStore`]:
//!
//! - `/external/candidates` for API-key holders, projected to the public
//!   fields and sortable only by an allow-list;
//! - `/api/candidates` for the frontend, returning every column.
//!
//! Alongside those sit health checks and the dev-mode auth stubs the
//! frontend expects to find.

pub mod auth;
pub mod config;
pub mod dev;
pub mod error;
pub mod external;
pub mod internal;
pub mod params;
pub mod seed;


use std::sync::Arc;

use axum::{
  Router,
  http::HeaderValue,
  routing::{get, post},
};
use candidates_core::store::CandidateStore;
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

pub use config::ServerConfig;
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: CandidateStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router, with CORS and request tracing applied.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let cors = cors_layer(&state.config);

  Router::new()
    .route("/health", get(dev::health))
    // Public, API-key protected
    .route("/external/candidates", get(external::list::<S>))
    .route("/external/candidates/{id}", get(external::get_one::<S>))
    // Frontend
    .route("/api/candidates", get(internal::list::<S>))
    .route("/api/candidates/{id}", get(internal::get_one::<S>))
    .route("/api/health", get(dev::api_health))
    .route("/api/me", get(dev::me))
    .route("/api/files/presigned-url", get(dev::presigned_url))
    // Dev auth stubs
    .route("/auth/validate-token", get(dev::validate_token))
    .route("/auth/google", get(dev::google_login))
    .route("/auth/logout", post(dev::logout))
    .with_state(state)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
  let origins: Vec<HeaderValue> = config
    .allowed_origins()
    .into_iter()
    .filter_map(|origin| {
      // A wildcard cannot be combined with credentials.
      if origin == "*" {
        tracing::warn!("ignoring wildcard CORS origin; list origins explicitly");
        return None;
      }
      match HeaderValue::from_str(&origin) {
        Ok(v) => Some(v),
        Err(_) => {
          tracing::warn!(%origin, "ignoring unparseable CORS origin");
          None
        }
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_credentials(true)
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
}
