//! Dev-mode stand-ins for the frontend's auth and file endpoints, plus the
//! health checks.
//!
//! There is no OAuth flow and no file storage behind any of these; they
//! return fixed payloads so the frontend can render locally.

use axum::{
  Json,
  extract::{Query, rejection::QueryRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

fn dev_user() -> Value {
  json!({
    "id": 1,
    "displayName": "Dev User",
    "emails": [{ "value": "dev@localhost" }],
  })
}

/// `GET /health`
pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok", "service": "candidates-api" }))
}

/// `GET /api/health`
pub async fn api_health() -> Json<Value> { Json(json!({ "status": "ok" })) }

/// `GET /auth/validate-token`
pub async fn validate_token() -> Json<Value> { Json(json!({ "user": dev_user() })) }

/// `GET /auth/google`
pub async fn google_login() -> Json<Value> {
  Json(json!({ "message": "OAuth disabled in dev mode" }))
}

/// `POST /auth/logout`
pub async fn logout() -> Json<Value> { Json(json!({ "message": "Logged out" })) }

/// `GET /api/me`
pub async fn me() -> Json<Value> { Json(dev_user()) }

#[derive(Debug, Deserialize)]
pub struct PresignParams {
  pub key: String,
}

/// `GET /api/files/presigned-url?key=<key>`
pub async fn presigned_url(
  params: Result<Query<PresignParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
  let Query(PresignParams { key }) =
    params.map_err(|e| ApiError::Validation(e.body_text()))?;
  Ok(Json(json!({ "url": format!("https://placeholder.example.com/{key}") })))
}
