//! SQL construction for listing queries.
//!
//! The `WHERE` clause is built once from a [`SearchFilter`] and reused
//! verbatim by the count query and the window query, so both always see the
//! same predicate. User input only ever reaches SQLite as bound parameters;
//! column names and sort direction come from closed enums.
//!
//! SQLite's `LIKE` folds ASCII only, so both sides of every match go through
//! [`FOLD_FN`], which lower-cases with Rust's Unicode tables.

use candidates_core::query::{Column, ListQuery, SEARCHED_COLUMNS, SearchFilter, SortOrder};
use rusqlite::{functions::FunctionFlags, types::Value};

use crate::encode::CANDIDATE_COLUMNS;

/// Shortest term the trigram index can answer; shorter terms rely on LIKE
/// alone.
const TRIGRAM_MIN_CHARS: usize = 3;

/// Unicode lower-casing scalar function, registered per connection.
const FOLD_FN: &str = "fold";

/// Register the SQL functions the listing queries call.
pub fn register_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    FOLD_FN,
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let raw: Option<String> = ctx.get(0)?;
      Ok(raw.map(|s| s.to_lowercase()))
    },
  )
}

/// A rendered `WHERE` clause (possibly empty) and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
  sql:    String,
  params: Vec<Value>,
}

impl WhereClause {
  /// One parenthesised group per term, joined with `AND`. Inside a group the
  /// term may match any searched column.
  pub fn build(filter: &SearchFilter) -> WhereClause {
    let mut params = Vec::new();
    let mut groups = Vec::with_capacity(filter.terms().len());

    for term in filter.terms() {
      params.push(Value::Text(like_pattern(&term.to_lowercase())));
      let like_idx = params.len();
      let any_column = SEARCHED_COLUMNS
        .iter()
        .map(|col| format!("{FOLD_FN}(c.{}) LIKE ?{like_idx} ESCAPE '\\'", col.name()))
        .collect::<Vec<_>>()
        .join(" OR ");

      if term.chars().count() >= TRIGRAM_MIN_CHARS {
        params.push(Value::Text(fts_phrase(term)));
        let match_idx = params.len();
        groups.push(format!(
          "(c.id IN (SELECT rowid FROM candidate_search WHERE candidate_search MATCH ?{match_idx}) \
           AND ({any_column}))"
        ));
      } else {
        groups.push(format!("({any_column})"));
      }
    }

    let sql = if groups.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", groups.join(" AND "))
    };
    WhereClause { sql, params }
  }

  pub fn params(&self) -> &[Value] { &self.params }
}

/// `SELECT COUNT(*)` over the filtered set.
pub fn count_sql(clause: &WhereClause) -> String {
  format!("SELECT COUNT(*) FROM candidates c {}", clause.sql)
}

/// The window query plus its full parameter list (filter params followed by
/// `LIMIT` and `OFFSET`).
pub fn window_sql(clause: &WhereClause, query: &ListQuery) -> (String, Vec<Value>) {
  let mut params = clause.params.clone();
  params.push(Value::Integer(i64::from(query.window.limit())));
  let limit_idx = params.len();
  params.push(Value::Integer(
    i64::try_from(query.window.offset()).unwrap_or(i64::MAX),
  ));
  let offset_idx = params.len();

  let sql = format!(
    "SELECT {CANDIDATE_COLUMNS} FROM candidates c {} ORDER BY {} LIMIT ?{limit_idx} OFFSET ?{offset_idx}",
    clause.sql,
    order_by(query.sort, query.order),
  );
  (sql, params)
}

fn order_by(column: Column, order: SortOrder) -> String {
  let direction = match order {
    SortOrder::Asc => "ASC",
    SortOrder::Desc => "DESC",
  };
  format!("c.{} {direction}", column.name())
}

/// `%term%` with LIKE metacharacters escaped so the term matches literally.
fn like_pattern(term: &str) -> String {
  let mut out = String::with_capacity(term.len() + 2);
  out.push('%');
  for ch in term.chars() {
    if matches!(ch, '\\' | '%' | '_') {
      out.push('\\');
    }
    out.push(ch);
  }
  out.push('%');
  out
}

/// A single FTS5 string token; with the trigram tokenizer this is a
/// case-insensitive substring query.
fn fts_phrase(term: &str) -> String { format!("\"{}\"", term.replace('"', "\"\"")) }
