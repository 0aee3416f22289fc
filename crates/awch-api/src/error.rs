//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as `{"message": "..."}`.

use awch_core::{ErrorKind, StoreError};
use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  BadRequest(String),

  #[error("Method not allowed")]
  MethodNotAllowed,

  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a store failure by its [`ErrorKind`].
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.kind() {
      ErrorKind::NotFound => ApiError::NotFound(e.to_string()),
      ErrorKind::Validation | ErrorKind::InvalidId => {
        ApiError::BadRequest(e.to_string())
      }
      ErrorKind::Unavailable => ApiError::Store(Box::new(e)),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<awch_core::Error> for ApiError {
  fn from(e: awch_core::Error) -> Self { Self::from_store(e) }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if let ApiError::Store(e) = &self {
      tracing::error!(error = %e, "store failure");
    }
    (status, Json(json!({ "message": self.to_string() }))).into_response()
  }
}
