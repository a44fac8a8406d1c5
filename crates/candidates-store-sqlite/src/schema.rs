//! SQL schema for the candidate SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from ever being reused after a delete.
-- Text columns are never NULL so substring search never sees an absent value.
CREATE TABLE IF NOT EXISTS candidates (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name   TEXT NOT NULL DEFAULT '',
    last_name    TEXT NOT NULL DEFAULT '',
    email        TEXT NOT NULL DEFAULT '',
    phone_number TEXT NOT NULL DEFAULT '',
    state        TEXT NOT NULL DEFAULT '',
    favourite    TEXT NOT NULL DEFAULT '',
    create_time  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    notes        TEXT NOT NULL DEFAULT '',
    upload_file  TEXT NOT NULL DEFAULT '',
    upload_photo TEXT NOT NULL DEFAULT ''
);

-- B-tree indexes for ORDER BY ... LIMIT/OFFSET on the public sort columns.
-- `id` is the rowid and needs none.
CREATE INDEX IF NOT EXISTS candidates_first_name_idx  ON candidates(first_name);
CREATE INDEX IF NOT EXISTS candidates_last_name_idx   ON candidates(last_name);
CREATE INDEX IF NOT EXISTS candidates_email_idx       ON candidates(email);
CREATE INDEX IF NOT EXISTS candidates_state_idx       ON candidates(state);
CREATE INDEX IF NOT EXISTS candidates_favourite_idx   ON candidates(favourite);
CREATE INDEX IF NOT EXISTS candidates_create_time_idx ON candidates(create_time);

-- Trigram index over the searched columns. Narrows '%term%' lookups for terms
-- of three or more characters; the LIKE predicate stays authoritative.
CREATE VIRTUAL TABLE IF NOT EXISTS candidate_search USING fts5(
    first_name, last_name, email, state, favourite,
    content='candidates',
    content_rowid='id',
    tokenize='trigram'
);

CREATE TRIGGER IF NOT EXISTS candidates_search_ai AFTER INSERT ON candidates BEGIN
    INSERT INTO candidate_search (rowid, first_name, last_name, email, state, favourite)
    VALUES (new.id, new.first_name, new.last_name, new.email, new.state, new.favourite);
END;

CREATE TRIGGER IF NOT EXISTS candidates_search_ad AFTER DELETE ON candidates BEGIN
    INSERT INTO candidate_search (candidate_search, rowid, first_name, last_name, email, state, favourite)
    VALUES ('delete', old.id, old.first_name, old.last_name, old.email, old.state, old.favourite);
END;

CREATE TRIGGER IF NOT EXISTS candidates_search_au AFTER UPDATE ON candidates BEGIN
    INSERT INTO candidate_search (candidate_search, rowid, first_name, last_name, email, state, favourite)
    VALUES ('delete', old.id, old.first_name, old.last_name, old.email, old.state, old.favourite);
    INSERT INTO candidate_search (rowid, first_name, last_name, email, state, favourite)
    VALUES (new.id, new.first_name, new.last_name, new.email, new.state, new.favourite);
END;

-- id and create_time are fixed at insert.
CREATE TRIGGER IF NOT EXISTS candidates_immutable_bu BEFORE UPDATE OF id, create_time ON candidates
WHEN new.id IS NOT old.id OR new.create_time IS NOT old.create_time
BEGIN
    SELECT RAISE(ABORT, 'candidates.id and candidates.create_time are immutable');
END;

PRAGMA user_version = 1;
";
