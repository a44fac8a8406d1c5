//! [`SqliteStore`] — the SQLite implementation of [`CandidateStore`].

use std::{path::Path, time::Duration};

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior, params_from_iter};

use candidates_core::{
  candidate::{CandidateRecord, NewCandidate},
  query::{CandidatePage, ListQuery},
  store::CandidateStore,
};

use crate::{
  Error, Result,
  encode::{CANDIDATE_COLUMNS, RawCandidate, encode_dt},
  schema::SCHEMA,
  sql::{WhereClause, count_sql, register_functions, window_sql},
};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Connection tuning supplied by the operator.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
  /// Upper bound for one store round-trip, and SQLite's busy timeout.
  pub timeout: Duration,
}

impl Default for StoreOptions {
  fn default() -> Self { StoreOptions { timeout: Duration::from_secs(5) } }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A candidate store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:    tokio_rusqlite::Connection,
  timeout: Duration,
}

impl SqliteStore {
  /// Open (or create) a store at `path` with default options.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::open_with(path, StoreOptions::default()).await
  }

  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open_with(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, timeout: options.timeout };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, timeout: StoreOptions::default().timeout };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let busy = self.timeout;
    self
      .call(move |conn| {
        conn.busy_timeout(busy)?;
        register_functions(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
  }

  /// Run `f` on the connection thread, giving up after the configured
  /// timeout. An abandoned call still finishes on the connection thread.
  pub(crate) async fn call<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    tokio::time::timeout(self.timeout, self.conn.call(f))
      .await
      .map_err(|_| Error::Timeout(self.timeout))?
      .map_err(Error::from)
  }

  // ── Seed / import writes ───────────────────────────────────────────────

  /// Insert one candidate and return the stored record.
  pub async fn insert(&self, input: NewCandidate) -> Result<CandidateRecord> {
    let mut inserted = self.insert_many(vec![input]).await?;
    Ok(inserted.remove(0))
  }

  /// Insert candidates in a single transaction. Either all rows land or none.
  pub async fn insert_many(&self, inputs: Vec<NewCandidate>) -> Result<Vec<CandidateRecord>> {
    let now = Utc::now();
    let rows: Vec<(NewCandidate, String)> = inputs
      .into_iter()
      .map(|c| {
        let at = encode_dt(c.create_time.unwrap_or(now));
        (c, at)
      })
      .collect();

    let ids: Vec<i64> = {
      let rows = rows.clone();
      self
        .call(move |conn| {
          let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
          let mut ids = Vec::with_capacity(rows.len());
          {
            let mut stmt = tx.prepare(
              "INSERT INTO candidates (
                 id, first_name, last_name, email, phone_number, state,
                 favourite, create_time, notes, upload_file, upload_photo
               ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (c, at) in &rows {
              stmt.execute(rusqlite::params![
                c.id,
                c.first_name,
                c.last_name,
                c.email,
                c.phone_number,
                c.state,
                c.favourite,
                at,
                c.notes,
                c.upload_file,
                c.upload_photo,
              ])?;
              ids.push(tx.last_insert_rowid());
            }
          }
          tx.commit()?;
          Ok(ids)
        })
        .await?
    };

    rows
      .into_iter()
      .zip(ids)
      .map(|((c, at), id)| {
        RawCandidate {
          id,
          first_name: c.first_name,
          last_name: c.last_name,
          email: c.email,
          phone_number: c.phone_number,
          state: c.state,
          favourite: c.favourite,
          create_time: at,
          notes: c.notes,
          upload_file: c.upload_file,
          upload_photo: c.upload_photo,
        }
        .into_record()
      })
      .collect()
  }
}

// ─── CandidateStore impl ─────────────────────────────────────────────────────

impl CandidateStore for SqliteStore {
  type Error = Error;

  async fn get(&self, id: i64) -> Result<Option<CandidateRecord>> {
    let raw: Option<RawCandidate> = self
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CANDIDATE_COLUMNS} FROM candidates c WHERE c.id = ?1"),
            rusqlite::params![id],
            RawCandidate::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawCandidate::into_record).transpose()
  }

  async fn list(&self, query: &ListQuery) -> Result<CandidatePage<CandidateRecord>> {
    let clause = WhereClause::build(&query.filter);
    let count_stmt = count_sql(&clause);
    let count_params = clause.params().to_vec();
    let (window_stmt, window_params) = window_sql(&clause, query);

    // Both statements run inside one deferred read transaction, so the total
    // and the window come from the same snapshot.
    let (total, raws): (i64, Vec<RawCandidate>) = self
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
        let total: i64 =
          tx.query_row(&count_stmt, params_from_iter(count_params.iter()), |r| r.get(0))?;
        let rows = {
          let mut stmt = tx.prepare(&window_stmt)?;
          stmt
            .query_map(params_from_iter(window_params.iter()), RawCandidate::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        tx.commit()?;
        Ok((total, rows))
      })
      .await?;

    tracing::debug!(
      terms = query.filter.terms().len(),
      sort = query.sort.name(),
      order = ?query.order,
      page = query.window.page(),
      limit = query.window.limit(),
      total,
      "listed candidates"
    );

    Ok(CandidatePage {
      items:  raws
        .into_iter()
        .map(RawCandidate::into_record)
        .collect::<Result<_>>()?,
      total:  u64::try_from(total).unwrap_or_default(),
      window: query.window,
    })
  }
}
