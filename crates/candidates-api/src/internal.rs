//! Handlers for the internal `/api/candidates` endpoints used by the
//! frontend.
//!
//! Same search and pagination as the public surface, but every column is
//! returned, an unknown `sort` falls back to `create_time`, and the list
//! envelope carries only `data` and `total`.

use axum::{
  Json,
  extract::{Path, Query, State, rejection::{PathRejection, QueryRejection}},
};
use candidates_core::{candidate::CandidateRecord, store::CandidateStore};
use serde::Serialize;

use crate::{AppState, error::ApiError, params::ListParams};

#[derive(Debug, Serialize)]
pub struct InternalPage {
  pub data:  Vec<CandidateRecord>,
  pub total: u64,
}

/// `GET /api/candidates`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<InternalPage>, ApiError>
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let query = ListParams::extract(params)?.into_internal_query()?;

  let page = state
    .store
    .list(&query)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(InternalPage { data: page.items, total: page.total }))
}

/// `GET /api/candidates/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CandidateRecord>, ApiError>
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
  Ok(Json(candidate))
}
