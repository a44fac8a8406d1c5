//! Handlers for the public `/external/candidates` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/external/candidates` | `?search=&sort=&order=&page=&limit=` |
//! | `GET`  | `/external/candidates/{id}` | 404 if not found |
//!
//! Both require `X-API-Key`; records are always projected to [`PublicView`].

use axum::{
  Json,
  extract::{Path, Query, State, rejection::{PathRejection, QueryRejection}},
};
use candidates_core::{candidate::PublicView, store::CandidateStore};
use serde::Serialize;

use crate::{AppState, auth::ApiKey, error::ApiError, params::ListParams};

// ─── List ─────────────────────────────────────────────────────────────────────

/// Paginated envelope for the public listing.
#[derive(Debug, Serialize)]
pub struct PublicPage {
  pub data:  Vec<PublicView>,
  pub total: u64,
  pub page:  u64,
  pub limit: u32,
  pub pages: u64,
}

/// `GET /external/candidates`
pub async fn list<S>(
  _auth: ApiKey,
  State(state): State<AppState<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PublicPage>, ApiError>
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let query = ListParams::extract(params)?.into_public_query()?;

  let page = state
    .store
    .list(&query)
    .await
    .map_err(ApiError::store)?;

  let pages = page.pages();
  let page = page.map(PublicView::from);
  Ok(Json(PublicPage {
    data:  page.items,
    total: page.total,
    page:  page.window.page(),
    limit: page.window.limit(),
    pages,
  }))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /external/candidates/{id}`
pub async fn get_one<S>(
  _auth: ApiKey,
  State(state): State<AppState<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PublicView>, ApiError>
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;

  let candidate = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(candidate.into()))
}
