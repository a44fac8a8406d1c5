//! The `CandidateStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `candidates-store-sqlite`). The HTTP layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  candidate::CandidateRecord,
  query::{CandidatePage, ListQuery},
};

/// Read-only access to the candidate table.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CandidateStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a candidate by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<CandidateRecord>, Self::Error>> + Send + '_;

  /// Count and fetch one window of candidates matching `query`.
  ///
  /// Implementations must evaluate the count and the window against the same
  /// snapshot, so `total` always describes the set the window was cut from.
  fn list<'a>(
    &'a self,
    query: &'a ListQuery,
  ) -> impl Future<Output = Result<CandidatePage<CandidateRecord>, Self::Error>>
  + Send
  + 'a;
}
