//! Error types for `candidates-core`.

use thiserror::Error;

/// A listing parameter that failed validation.
///
/// Raised before any query reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("page must be at least 1, got {0}")]
  InvalidPage(i64),

  #[error("limit must be between 1 and 500, got {0}")]
  InvalidLimit(i64),

  #[error("sort must be one of {allowed}, got {got:?}")]
  InvalidSort { got: String, allowed: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
