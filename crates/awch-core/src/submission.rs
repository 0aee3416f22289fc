//! Submission: the single record type of the backend.
//!
//! A submission is created once from client input, may have its `status`
//! changed afterwards, and is otherwise immutable until it is deleted.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Opaque, store-assigned identifier. Serialised as a hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }

  /// Parse a client-supplied identifier, failing with
  /// [`Error::InvalidId`] if it is not well-formed.
  pub fn parse(s: &str) -> Result<Self> {
    Uuid::parse_str(s)
      .map(Self)
      .map_err(|_| Error::InvalidId(s.to_owned()))
  }

  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl Default for SubmissionId {
  fn default() -> Self { Self::new() }
}

impl fmt::Display for SubmissionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.hyphenated())
  }
}

impl FromStr for SubmissionId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// The review state of a submission.
///
/// Any status may follow any other; no workflow ordering is enforced.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
  #[default]
  Pending,
  Reviewed,
  Resolved,
  Archived,
}

impl Status {
  /// Parse a status from client input, rejecting anything outside the
  /// vocabulary with [`Error::UnknownStatus`].
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownStatus {
      given:   s.to_owned(),
      allowed: Self::VARIANTS.join(", "),
    })
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A persisted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub id:         SubmissionId,
  pub name:       String,
  pub email:      String,
  pub message:    String,
  pub status:     Status,
  /// Server-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
}

impl Submission {
  /// Apply a patch in place. Only `status` is mutable.
  pub fn apply(&mut self, patch: &SubmissionPatch) -> Result<()> {
    if let Some(status) = patch.status()? {
      self.status = status;
    }
    Ok(())
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Client input for creating a submission.
///
/// Every field is optional at the type level so that a missing field surfaces
/// as a validation error rather than a deserialisation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSubmission {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub message: Option<String>,
}

impl NewSubmission {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    message: impl Into<String>,
  ) -> Self {
    Self {
      name:    Some(name.into()),
      email:   Some(email.into()),
      message: Some(message.into()),
    }
  }

  /// Validate the input and build a fresh record with a new id, the default
  /// status and the given creation time.
  pub fn into_submission(self, created_at: DateTime<Utc>) -> Result<Submission> {
    Ok(Submission {
      id: SubmissionId::new(),
      name: required("name", self.name)?,
      email: required("email", self.email)?,
      message: required("message", self.message)?,
      status: Status::default(),
      created_at,
    })
  }
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(v),
    _ => Err(Error::MissingField(field)),
  }
}

/// Client input for updating a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionPatch {
  /// New status. Absent or empty leaves the current status untouched.
  pub status: Option<String>,
}

impl SubmissionPatch {
  pub fn status(&self) -> Result<Option<Status>> {
    self
      .status
      .as_deref()
      .filter(|s| !s.is_empty())
      .map(Status::parse)
      .transpose()
  }
}
