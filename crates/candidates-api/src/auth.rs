//! Shared-secret `X-API-Key` extractor and standalone verifier.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, request::Parts},
};
use candidates_core::store::CandidateStore;

use crate::{AppState, error::ApiError};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Zero-size marker: present in the handler means the request carried the
/// configured API key.
pub struct ApiKey;

/// Check the `X-API-Key` header against `expected`.
///
/// Absent (or empty) header is checked first, then a missing server secret,
/// then the comparison itself.
pub fn verify_api_key(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
  let provided = headers
    .get(API_KEY_HEADER)
    .map(|v| v.as_bytes())
    .filter(|v| !v.is_empty())
    .ok_or(ApiError::MissingApiKey)?;

  if expected.is_empty() {
    tracing::error!("external_api_key is not configured; rejecting public request");
    return Err(ApiError::AuthNotConfigured);
  }

  if provided != expected.as_bytes() {
    let prefix: String = String::from_utf8_lossy(provided).chars().take(8).collect();
    tracing::warn!(key_prefix = %prefix, "invalid API key attempt");
    return Err(ApiError::InvalidApiKey);
  }

  Ok(())
}

impl<S> FromRequestParts<AppState<S>> for ApiKey
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_api_key(&parts.headers, &state.config.external_api_key)?;
    Ok(ApiKey)
  }
}
