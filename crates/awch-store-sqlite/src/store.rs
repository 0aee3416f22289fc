//! [`SqliteStore`]: the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use awch_core::{
  store::SubmissionStore,
  submission::{NewSubmission, Submission, SubmissionId, SubmissionPatch},
};

use crate::{
  encode::{decode_document, encode_document, encode_dt, encode_id},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A submission store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Load a submission document, or `None` if no row has `id`.
  async fn fetch(&self, id: SubmissionId) -> Result<Option<Submission>> {
    let id_str = encode_id(id);

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT document FROM submissions WHERE id = ?1",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;

    raw.as_deref().map(decode_document).transpose()
  }

  async fn fetch_existing(&self, id: SubmissionId) -> Result<Submission> {
    self
      .fetch(id)
      .await?
      .ok_or(Error::Core(awch_core::Error::NotFound(id)))
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewSubmission) -> Result<Submission> {
    let submission = input.into_submission(Utc::now())?;

    let id_str  = encode_id(submission.id);
    let at_str  = encode_dt(submission.created_at);
    let doc_str = encode_document(&submission)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO submissions (id, created_at, document) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, at_str, doc_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(id = %submission.id, "created submission");
    Ok(submission)
  }

  async fn get_all(&self) -> Result<Vec<Submission>> {
    let docs: Vec<String> = self
      .conn
      .call(|conn| {
        // rowid breaks ties between records created in the same instant.
        let mut stmt = conn.prepare(
          "SELECT document FROM submissions ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    docs.iter().map(|d| decode_document(d)).collect()
  }

  async fn get_by_id(&self, id: SubmissionId) -> Result<Submission> {
    self.fetch_existing(id).await
  }

  async fn update(&self, id: SubmissionId, patch: SubmissionPatch) -> Result<Submission> {
    let mut submission = self.fetch_existing(id).await?;
    submission.apply(&patch)?;

    let id_str  = encode_id(id);
    let doc_str = encode_document(&submission)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE submissions SET document = ?2 WHERE id = ?1",
          rusqlite::params![id_str, doc_str],
        )?)
      })
      .await?;

    // Deleted between the read and the write.
    if changed == 0 {
      return Err(Error::Core(awch_core::Error::NotFound(id)));
    }

    tracing::debug!(%id, status = %submission.status, "updated submission");
    Ok(submission)
  }

  async fn delete(&self, id: SubmissionId) -> Result<Submission> {
    let id_str = encode_id(id);

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "DELETE FROM submissions WHERE id = ?1 RETURNING document",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;

    let submission = raw
      .as_deref()
      .map(decode_document)
      .transpose()?
      .ok_or(Error::Core(awch_core::Error::NotFound(id)))?;

    tracing::debug!(%id, "deleted submission");
    Ok(submission)
  }
}
