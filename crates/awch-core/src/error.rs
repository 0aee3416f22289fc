//! Error types for `awch-core`.

use thiserror::Error;

use crate::submission::SubmissionId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("submission validation failed: {0} is required")]
  MissingField(&'static str),

  #[error("submission validation failed: unknown status {given:?}, expected one of {allowed}")]
  UnknownStatus { given: String, allowed: String },

  #[error("invalid submission id: {0:?}")]
  InvalidId(String),

  #[error("Submission not found")]
  NotFound(SubmissionId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of a store failure, used by the HTTP layer to pick
/// a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Malformed or missing input.
  Validation,
  /// The referenced record does not exist.
  NotFound,
  /// The identifier is not well-formed.
  InvalidId,
  /// The backing storage could not serve the request.
  Unavailable,
}

/// Implemented by every store backend's error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::MissingField(_) | Error::UnknownStatus { .. } => ErrorKind::Validation,
      Error::InvalidId(_) => ErrorKind::InvalidId,
      Error::NotFound(_) => ErrorKind::NotFound,
    }
  }
}
