//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with fixed millisecond
//! precision (`2024-05-01T09:30:00.000Z`), the same shape the column default
//! produces, so lexical order on `create_time` is chronological order.

use candidates_core::candidate::CandidateRecord;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339_opts(SecondsFormat::Millis, true) }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that produces a [`RawCandidate`].
pub const CANDIDATE_COLUMNS: &str = "c.id, c.first_name, c.last_name, c.email, c.phone_number, \
   c.state, c.favourite, c.create_time, c.notes, c.upload_file, c.upload_photo";

/// Raw values read directly from a `candidates` row.
pub struct RawCandidate {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub state:        String,
  pub favourite:    String,
  pub create_time:  String,
  pub notes:        String,
  pub upload_file:  String,
  pub upload_photo: String,
}

impl RawCandidate {
  /// Read a row selected with [`CANDIDATE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawCandidate {
      id:           row.get(0)?,
      first_name:   row.get(1)?,
      last_name:    row.get(2)?,
      email:        row.get(3)?,
      phone_number: row.get(4)?,
      state:        row.get(5)?,
      favourite:    row.get(6)?,
      create_time:  row.get(7)?,
      notes:        row.get(8)?,
      upload_file:  row.get(9)?,
      upload_photo: row.get(10)?,
    })
  }

  pub fn into_record(self) -> Result<CandidateRecord> {
    Ok(CandidateRecord {
      id:           self.id,
      first_name:   self.first_name,
      last_name:    self.last_name,
      email:        self.email,
      phone_number: self.phone_number,
      state:        self.state,
      favourite:    self.favourite,
      create_time:  decode_dt(&self.create_time)?,
      notes:        self.notes,
      upload_file:  self.upload_file,
      upload_photo: self.upload_photo,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn encoded_timestamps_sort_chronologically() {
    let early = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 11, 2, 3, 4, 5).unwrap();
    assert_eq!(encode_dt(early), "2024-01-02T03:04:05.000Z");
    assert!(encode_dt(early) < encode_dt(late));
  }

  #[test]
  fn decodes_column_default_shape() {
    let dt = decode_dt("2024-06-30T12:00:00.250Z").unwrap();
    assert_eq!(encode_dt(dt), "2024-06-30T12:00:00.250Z");
  }

  #[test]
  fn rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
