//! The `SubmissionStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `awch-store-sqlite`).
//! The HTTP layer (`awch-api`) depends on this abstraction, not on any
//! concrete backend, and receives the store as an explicit handle.

use std::future::Future;

use crate::{
  error::StoreError,
  submission::{NewSubmission, Submission, SubmissionId, SubmissionPatch},
};

/// Abstraction over a submission store backend.
///
/// Every operation touches at most one record, so backends only need
/// single-document atomicity.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: StoreError;

  /// Validate `input` and persist a new submission. The id, default status
  /// and `created_at` timestamp are assigned by the store.
  fn create(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;

  /// All submissions, most recently created first.
  fn get_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send + '_;

  /// Fetch one submission. Errors with a `NotFound` kind if absent.
  fn get_by_id(
    &self,
    id: SubmissionId,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;

  /// Apply `patch` to an existing submission and persist it. An empty patch
  /// re-persists the record unchanged.
  fn update(
    &self,
    id: SubmissionId,
    patch: SubmissionPatch,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;

  /// Remove a submission, returning the removed record. A second delete of
  /// the same id errors with a `NotFound` kind.
  fn delete(
    &self,
    id: SubmissionId,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;
}
