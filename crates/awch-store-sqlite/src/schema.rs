//! SQL schema for the AWCH SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout version.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per submission. `document` holds the whole record as JSON;
-- `created_at` is duplicated out of it so listings can be ordered in SQL.
CREATE TABLE IF NOT EXISTS submissions (
    id          TEXT PRIMARY KEY,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC, fixed nanosecond width
    document    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS submissions_created_idx ON submissions(created_at);

PRAGMA user_version = 1;
";
