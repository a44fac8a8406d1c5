//! Listing query-string parameters shared by both candidate surfaces.
//!
//! The two surfaces parse the same parameters but differ in defaults and in
//! how strictly `sort` is checked.

use axum::extract::{Query, rejection::QueryRejection};
use candidates_core::query::{
  Column, DEFAULT_LIMIT, ListQuery, PageRequest, SearchFilter, SortOrder,
};
use serde::Deserialize;

use crate::error::ApiError;

/// `?search=&sort=&order=&page=&limit=`, all optional.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Space-separated terms; every term must match some searched column.
  pub search: Option<String>,
  pub sort:   Option<String>,
  /// `asc` or `desc`, any case.
  pub order:  Option<String>,
  pub page:   Option<i64>,
  pub limit:  Option<i64>,
}

impl ListParams {
  /// Unwrap an axum query extraction, turning a malformed query string into
  /// a validation error.
  pub fn extract(query: Result<Query<ListParams>, QueryRejection>) -> Result<Self, ApiError> {
    query
      .map(|Query(p)| p)
      .map_err(|e| ApiError::Validation(e.body_text()))
  }

  /// Public rules: `sort` defaults to `first_name` and must be in the public
  /// allow-list; `order` defaults to ascending.
  pub fn into_public_query(self) -> Result<ListQuery, ApiError> {
    let sort = match self.sort.as_deref() {
      None => Column::FirstName,
      Some(raw) => Column::parse_public_sort(raw)?,
    };
    let order = self.order.as_deref().map_or(SortOrder::Asc, SortOrder::parse);
    self.finish(sort, order)
  }

  /// Internal rules: unknown `sort` values quietly become `create_time`;
  /// `order` defaults to descending.
  pub fn into_internal_query(self) -> Result<ListQuery, ApiError> {
    let sort = self
      .sort
      .as_deref()
      .map_or(Column::CreateTime, Column::parse_lenient_sort);
    let order = self.order.as_deref().map_or(SortOrder::Desc, SortOrder::parse);
    self.finish(sort, order)
  }

  fn finish(self, sort: Column, order: SortOrder) -> Result<ListQuery, ApiError> {
    let window = PageRequest::new(
      self.page.unwrap_or(1),
      self.limit.unwrap_or(DEFAULT_LIMIT),
    )?;
    Ok(ListQuery {
      filter: SearchFilter::parse(self.search.as_deref().unwrap_or_default()),
      sort,
      order,
      window,
    })
  }
}
