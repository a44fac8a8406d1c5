//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as `{"detail": "<message>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler or extractor.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A request parameter was malformed or out of range.
  #[error("{0}")]
  Validation(String),

  #[error("Candidate not found")]
  NotFound,

  #[error("API key required")]
  MissingApiKey,

  #[error("Invalid API key")]
  InvalidApiKey,

  /// The server has no shared secret to compare against.
  #[error("API key validation not configured")]
  AuthNotConfigured,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::MissingApiKey => StatusCode::UNAUTHORIZED,
      ApiError::InvalidApiKey => StatusCode::FORBIDDEN,
      ApiError::AuthNotConfigured | ApiError::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl From<candidates_core::Error> for ApiError {
  fn from(e: candidates_core::Error) -> Self { ApiError::Validation(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let detail = match &self {
      // Store internals stay in the log.
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        "Internal server error".to_owned()
      }
      other => other.to_string(),
    };
    (status, Json(json!({ "detail": detail }))).into_response()
  }
}
