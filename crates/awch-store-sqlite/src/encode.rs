//! Encoding helpers between domain types and SQLite column text.
//!
//! Timestamps are written with a fixed nanosecond width so that their
//! lexical order matches chronological order.

use awch_core::submission::{Submission, SubmissionId};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::Result;

pub fn encode_id(id: SubmissionId) -> String { id.to_string() }

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn encode_document(submission: &Submission) -> Result<String> {
  Ok(serde_json::to_string(submission)?)
}

pub fn decode_document(s: &str) -> Result<Submission> {
  Ok(serde_json::from_str(s)?)
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn timestamps_sort_lexically() {
    let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
    let fraction = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
      + chrono::Duration::milliseconds(500);

    let (a, b) = (encode_dt(fraction), encode_dt(whole));
    assert_eq!(a.len(), b.len());
    assert!(a < b, "{a} should sort before {b}");
  }
}
