//! Error type for `awch-store-sqlite`.

use awch_core::{ErrorKind, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] awch_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Core(e) => e.kind(),
      Error::Database(_) | Error::Json(_) => ErrorKind::Unavailable,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
