//! Handlers for `/submissions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/submissions` | Newest first |
//! | `POST`   | `/submissions` | Body: [`NewSubmission`]; returns 201 + stored record |
//! | `GET`    | `/submissions/:id` | 404 if not found, 400 if the id is malformed |
//! | `PATCH`  | `/submissions/:id` | Body: [`SubmissionPatch`]; only `status` changes |
//! | `DELETE` | `/submissions/:id` | Returns `{"message":"Submission deleted"}` |

use std::sync::Arc;

use awch_core::{
  store::SubmissionStore,
  submission::{NewSubmission, Submission, SubmissionId, SubmissionPatch},
};
use axum::{
  Json,
  body::Bytes,
  extract::{Path, State, rejection::JsonRejection},
  http::{HeaderMap, StatusCode, header},
  response::IntoResponse,
};
use serde::Serialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /submissions`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Submission>>, ApiError>
where
  S: SubmissionStore,
{
  let submissions = store.get_all().await.map_err(ApiError::from_store)?;
  Ok(Json(submissions))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /submissions/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError>
where
  S: SubmissionStore,
{
  let id = SubmissionId::parse(&id)?;
  let submission = store.get_by_id(id).await.map_err(ApiError::from_store)?;
  Ok(Json(submission))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /submissions`: returns 201 + the stored [`Submission`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubmissionStore,
{
  let Json(input) = body?;
  let submission = store.create(input).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(submission)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /submissions/:id`: body `{"status":"..."}` (optional).
///
/// An empty body, or a body not sent as JSON, is treated as an empty patch.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Submission>, ApiError>
where
  S: SubmissionStore,
{
  let id = SubmissionId::parse(&id)?;
  let patch = if body.is_empty() || !is_json(&headers) {
    SubmissionPatch::default()
  } else {
    let Json(patch) = Json::<SubmissionPatch>::from_bytes(&body)?;
    patch
  };
  let submission = store
    .update(id, patch)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(submission))
}

fn is_json(headers: &HeaderMap) -> bool {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(';').next())
    .map(|mime| {
      let mime = mime.trim().to_ascii_lowercase();
      mime == "application/json" || mime.ends_with("+json")
    })
    .unwrap_or(false)
}

// ─── Not found / method not allowed ───────────────────────────────────────────

/// Fallback for paths that match no route.
pub async fn not_found() -> ApiError { ApiError::NotFound("Not found".into()) }

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: &'static str,
}

/// `DELETE /submissions/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError>
where
  S: SubmissionStore,
{
  let id = SubmissionId::parse(&id)?;
  store.delete(id).await.map_err(ApiError::from_store)?;
  Ok(Json(Deleted { message: "Submission deleted" }))
}
