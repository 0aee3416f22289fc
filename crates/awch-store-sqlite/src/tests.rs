//! Integration tests for `SqliteStore` against an in-memory database.

use awch_core::{
  ErrorKind, StoreError,
  store::SubmissionStore,
  submission::{NewSubmission, Status, SubmissionId, SubmissionPatch},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn ann() -> NewSubmission { NewSubmission::new("Ann", "ann@x.com", "hello") }

fn status_patch(status: &str) -> SubmissionPatch {
  SubmissionPatch { status: Some(status.into()) }
}

// ─── Create / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_by_id() {
  let s = store().await;

  let created = s.create(ann()).await.unwrap();
  assert_eq!(created.name, "Ann");
  assert_eq!(created.email, "ann@x.com");
  assert_eq!(created.message, "hello");
  assert_eq!(created.status, Status::Pending);

  let fetched = s.get_by_id(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create(ann()).await.unwrap();
  let b = s.create(ann()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_with_empty_field_is_validation_error() {
  let s = store().await;
  let err = s
    .create(NewSubmission::new("", "x@x.com", "hi"))
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);

  // Nothing was persisted.
  assert!(s.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_missing_field_is_validation_error() {
  let s = store().await;
  let input = NewSubmission {
    name:    Some("Ann".into()),
    email:   None,
    message: Some("hi".into()),
  };
  let err = s.create(input).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn get_all_empty() {
  let s = store().await;
  assert!(s.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_all_is_newest_first() {
  let s = store().await;
  let a = s.create(NewSubmission::new("A", "a@x.com", "first")).await.unwrap();
  let b = s.create(NewSubmission::new("B", "b@x.com", "second")).await.unwrap();
  let c = s.create(NewSubmission::new("C", "c@x.com", "third")).await.unwrap();

  let ids: Vec<SubmissionId> = s.get_all().await.unwrap().iter().map(|x| x.id).collect();
  assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
  let s = store().await;
  let err = s.get_by_id(SubmissionId::new()).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "Submission not found");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_status_persists() {
  let s = store().await;
  let created = s.create(ann()).await.unwrap();

  let updated = s.update(created.id, status_patch("archived")).await.unwrap();
  assert_eq!(updated.status, Status::Archived);

  let fetched = s.get_by_id(created.id).await.unwrap();
  assert_eq!(fetched.status, Status::Archived);
  // Everything else is untouched.
  assert_eq!(fetched.name, created.name);
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_without_status_leaves_prior_status() {
  let s = store().await;
  let created = s.create(ann()).await.unwrap();
  s.update(created.id, status_patch("reviewed")).await.unwrap();

  let updated = s.update(created.id, SubmissionPatch::default()).await.unwrap();
  assert_eq!(updated.status, Status::Reviewed);
  assert_eq!(s.get_by_id(created.id).await.unwrap().status, Status::Reviewed);
}

#[tokio::test]
async fn update_unknown_status_is_validation_error() {
  let s = store().await;
  let created = s.create(ann()).await.unwrap();

  let err = s.update(created.id, status_patch("deleted")).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);
  assert_eq!(s.get_by_id(created.id).await.unwrap().status, Status::Pending);
}

#[tokio::test]
async fn update_missing_is_not_found() {
  let s = store().await;
  let err = s
    .update(SubmissionId::new(), status_patch("bogus"))
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn update_does_not_reorder_listing() {
  let s = store().await;
  let a = s.create(NewSubmission::new("A", "a@x.com", "first")).await.unwrap();
  let b = s.create(NewSubmission::new("B", "b@x.com", "second")).await.unwrap();
  s.update(a.id, status_patch("resolved")).await.unwrap();

  let ids: Vec<SubmissionId> = s.get_all().await.unwrap().iter().map(|x| x.id).collect();
  assert_eq!(ids, vec![b.id, a.id]);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_once_then_not_found() {
  let s = store().await;
  let created = s.create(ann()).await.unwrap();

  let removed = s.delete(created.id).await.unwrap();
  assert_eq!(removed, created);

  let err = s.delete(created.id).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);

  let err = s.get_by_id(created.id).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
  let s = store().await;
  let err = s.delete(SubmissionId::new()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(awch_core::Error::NotFound(_))
  ));
}

#[tokio::test]
async fn delete_leaves_other_records() {
  let s = store().await;
  let a = s.create(ann()).await.unwrap();
  let b = s.create(ann()).await.unwrap();
  s.delete(a.id).await.unwrap();

  let all = s.get_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, b.id);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_records() {
  let path = std::env::temp_dir().join(format!("awch-{}.sqlite3", SubmissionId::new()));

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(ann()).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get_by_id(created.id).await.unwrap(), created);

  drop(s);
  for suffix in ["", "-wal", "-shm"] {
    let mut p = path.clone().into_os_string();
    p.push(suffix);
    let _ = std::fs::remove_file(p);
  }
}
