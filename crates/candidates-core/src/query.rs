//! Listing parameters: search filter, sort column, order, and page window.
//!
//! Everything here is validated and pure. A [`ListQuery`] is built once per
//! request and handed to [`CandidateStore::list`](crate::store::CandidateStore::list),
//! which derives both the count query and the fetch query from it.

use strum::{EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

use crate::{Error, Result};

/// Default window size when the caller gives no `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest accepted window size.
pub const MAX_LIMIT: i64 = 500;

// ─── Columns ─────────────────────────────────────────────────────────────────

/// Every column of the `candidates` table.
///
/// Parsing is exact and case-sensitive (`"first_name"`, not `"First_Name"`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
  Id,
  FirstName,
  LastName,
  Email,
  PhoneNumber,
  State,
  Favourite,
  CreateTime,
  Notes,
  UploadFile,
  UploadPhoto,
}

/// Columns matched by free-text search terms.
pub const SEARCHED_COLUMNS: [Column; 5] = [
  Column::Favourite,
  Column::FirstName,
  Column::LastName,
  Column::Email,
  Column::State,
];

/// Columns the public API allows as `sort`.
pub const PUBLIC_SORT_COLUMNS: [Column; 7] = [
  Column::FirstName,
  Column::LastName,
  Column::Email,
  Column::State,
  Column::Id,
  Column::Favourite,
  Column::CreateTime,
];

impl Column {
  /// The column's name in the store and in API parameters.
  pub fn name(self) -> &'static str { self.into() }

  pub fn is_public_sort(self) -> bool { PUBLIC_SORT_COLUMNS.contains(&self) }

  /// Strict parse used by the public API: unknown or non-public columns are
  /// rejected.
  pub fn parse_public_sort(raw: &str) -> Result<Column> {
    raw
      .parse::<Column>()
      .ok()
      .filter(|c| c.is_public_sort())
      .ok_or_else(|| Error::InvalidSort {
        got:     raw.to_owned(),
        allowed: PUBLIC_SORT_COLUMNS
          .iter()
          .map(|c| c.name())
          .collect::<Vec<_>>()
          .join("|"),
      })
  }

  /// Lenient parse used by the internal API: any real column is accepted,
  /// anything else falls back to `create_time`.
  pub fn parse_lenient_sort(raw: &str) -> Column {
    raw.parse::<Column>().unwrap_or(Column::CreateTime)
  }

  /// All column names in table order.
  pub fn all_names() -> Vec<&'static str> { Column::iter().map(Column::name).collect() }
}

// ─── Order ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  /// Anything other than a case-insensitive `desc` means ascending.
  pub fn parse(raw: &str) -> SortOrder {
    if raw.trim().eq_ignore_ascii_case("desc") {
      SortOrder::Desc
    } else {
      SortOrder::Asc
    }
  }
}

// ─── Search ──────────────────────────────────────────────────────────────────

/// Whitespace-split search terms.
///
/// A row matches when every term is a case-insensitive substring of at least
/// one of the [`SEARCHED_COLUMNS`]. No terms means no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
  terms: Vec<String>,
}

impl SearchFilter {
  pub fn parse(raw: &str) -> SearchFilter {
    SearchFilter {
      terms: raw.split_whitespace().map(str::to_owned).collect(),
    }
  }

  pub fn terms(&self) -> &[String] { &self.terms }

  pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// A validated one-based page number and window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  page:  u64,
  limit: u32,
}

impl PageRequest {
  /// Validate `page >= 1` and `1 <= limit <= MAX_LIMIT`. Out-of-range values
  /// are errors, never clamped.
  pub fn new(page: i64, limit: i64) -> Result<PageRequest> {
    let page = u64::try_from(page)
      .ok()
      .filter(|&p| p >= 1)
      .ok_or(Error::InvalidPage(page))?;
    if !(1..=MAX_LIMIT).contains(&limit) {
      return Err(Error::InvalidLimit(limit));
    }
    Ok(PageRequest { page, limit: limit as u32 })
  }

  pub fn page(&self) -> u64 { self.page }

  pub fn limit(&self) -> u32 { self.limit }

  /// Zero-based row offset of the first row in this window.
  pub fn offset(&self) -> u64 { (self.page - 1).saturating_mul(u64::from(self.limit)) }
}

impl Default for PageRequest {
  fn default() -> Self { PageRequest { page: 1, limit: DEFAULT_LIMIT as u32 } }
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// Parameters for [`CandidateStore::list`](crate::store::CandidateStore::list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
  pub filter: SearchFilter,
  pub sort:   Column,
  pub order:  SortOrder,
  pub window: PageRequest,
}

/// One window of a filtered, ordered listing plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePage<T> {
  pub items:  Vec<T>,
  pub total:  u64,
  pub window: PageRequest,
}

impl<T> CandidatePage<T> {
  /// `ceil(total / limit)`, but never less than one.
  pub fn pages(&self) -> u64 { page_count(self.total, self.window.limit) }

  pub fn map<U>(self, f: impl FnMut(T) -> U) -> CandidatePage<U> {
    CandidatePage {
      items:  self.items.into_iter().map(f).collect(),
      total:  self.total,
      window: self.window,
    }
  }
}

pub fn page_count(total: u64, limit: u32) -> u64 { total.div_ceil(u64::from(limit)).max(1) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn search_splits_on_any_whitespace() {
    let f = SearchFilter::parse("  First2 \t California\n");
    assert_eq!(f.terms(), ["First2", "California"]);
  }

  #[test]
  fn blank_search_is_no_filter() {
    assert!(SearchFilter::parse("").is_empty());
    assert!(SearchFilter::parse("   \t ").is_empty());
  }

  #[test]
  fn order_is_desc_only_for_desc() {
    assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
    assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse("DeSc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
    assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    assert_eq!(SortOrder::parse(""), SortOrder::Asc);
  }

  #[test]
  fn public_sort_rejects_unknown_and_private_columns() {
    assert_eq!(Column::parse_public_sort("email"), Ok(Column::Email));
    assert_eq!(Column::parse_public_sort("create_time"), Ok(Column::CreateTime));
    assert!(matches!(
      Column::parse_public_sort("password"),
      Err(Error::InvalidSort { .. })
    ));
    assert!(matches!(
      Column::parse_public_sort("notes"),
      Err(Error::InvalidSort { .. })
    ));
    assert!(Column::parse_public_sort("First_Name").is_err());
  }

  #[test]
  fn lenient_sort_falls_back_to_create_time() {
    assert_eq!(Column::parse_lenient_sort("notes"), Column::Notes);
    assert_eq!(Column::parse_lenient_sort("last_name"), Column::LastName);
    assert_eq!(Column::parse_lenient_sort("bogus"), Column::CreateTime);
    assert_eq!(Column::parse_lenient_sort(""), Column::CreateTime);
  }

  #[test]
  fn column_names_round_trip_through_strum() {
    for name in Column::all_names() {
      let col: Column = name.parse().unwrap();
      assert_eq!(col.name(), name);
    }
  }

  #[test]
  fn page_request_rejects_out_of_range() {
    assert_eq!(PageRequest::new(0, 10), Err(Error::InvalidPage(0)));
    assert_eq!(PageRequest::new(-3, 10), Err(Error::InvalidPage(-3)));
    assert_eq!(PageRequest::new(1, 0), Err(Error::InvalidLimit(0)));
    assert_eq!(PageRequest::new(1, 501), Err(Error::InvalidLimit(501)));
    assert!(PageRequest::new(1, 500).is_ok());
    assert!(PageRequest::new(1, 1).is_ok());
  }

  #[test]
  fn page_has_no_upper_bound() {
    let far = PageRequest::new(5_000_000_000, 10).unwrap();
    assert_eq!(far.page(), 5_000_000_000);
    assert_eq!(far.offset(), 49_999_999_990);
    assert_eq!(PageRequest::new(i64::MAX, 500).unwrap().offset(), u64::MAX);
  }

  #[test]
  fn offset_is_zero_based() {
    assert_eq!(PageRequest::new(1, 25).unwrap().offset(), 0);
    assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 50);
  }

  #[test]
  fn page_count_is_at_least_one() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(10, 3), 4);
    for total in 0..200_u64 {
      for limit in 1..20_u32 {
        let expected = ((total as f64) / f64::from(limit)).ceil().max(1.0) as u64;
        assert_eq!(page_count(total, limit), expected, "total={total} limit={limit}");
      }
    }
  }
}
