//! Candidate records and their output projections.
//!
//! A candidate is read-only from this service's point of view. Records are
//! created by seed/import tooling; the HTTP surfaces only ever read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A stored candidate with every column.
///
/// Serialised as-is this is the "full view" served by the internal API.
/// Text columns are never null; absent values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub state:        String,
  pub favourite:    String,
  pub create_time:  DateTime<Utc>,
  pub notes:        String,
  pub upload_file:  String,
  pub upload_photo: String,
}

/// Projects onto the fields the public API is allowed to expose.
impl From<CandidateRecord> for PublicView {
  fn from(record: CandidateRecord) -> Self {
    PublicView {
      id:           record.id,
      first_name:   record.first_name,
      last_name:    record.last_name,
      email:        record.email,
      phone_number: record.phone_number,
      state:        record.state,
    }
  }
}

// ─── Projections ─────────────────────────────────────────────────────────────

/// The limited shape returned by `/external/candidates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub state:        String,
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Input for inserting a candidate via seed or import tooling.
///
/// `id` and `create_time` are assigned by the store when left as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCandidate {
  #[serde(default)]
  pub id:           Option<i64>,
  #[serde(default)]
  pub first_name:   String,
  #[serde(default)]
  pub last_name:    String,
  #[serde(default)]
  pub email:        String,
  #[serde(default)]
  pub phone_number: String,
  #[serde(default)]
  pub state:        String,
  #[serde(default)]
  pub favourite:    String,
  #[serde(default)]
  pub create_time:  Option<DateTime<Utc>>,
  #[serde(default)]
  pub notes:        String,
  #[serde(default)]
  pub upload_file:  String,
  #[serde(default)]
  pub upload_photo: String,
}
