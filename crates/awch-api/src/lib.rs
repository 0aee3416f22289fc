//! JSON REST API for AWCH submissions.
//!
//! Exposes an axum [`Router`] backed by any
//! [`awch_core::store::SubmissionStore`]. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", awch_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod submissions;

use std::sync::Arc;

use awch_core::store::SubmissionStore;
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubmissionStore + 'static,
{
  Router::new()
    .route(
      "/submissions",
      get(submissions::list::<S>).post(submissions::create::<S>),
    )
    .route(
      "/submissions/{id}",
      get(submissions::get_one::<S>)
        .patch(submissions::update::<S>)
        .delete(submissions::delete_one::<S>),
    )
    .fallback(submissions::not_found)
    .method_not_allowed_fallback(submissions::method_not_allowed)
    .with_state(store)
}
