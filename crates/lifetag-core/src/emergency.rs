//! The emergency wire payload — the data a tag carries.
//!
//! [`EmergencyData`] is the flat structure written into an NFC tag or URL
//! fragment. Wire keys are one byte each; that brevity is load-bearing for
//! NDEF record capacity, so the serde renames here ARE the wire format and
//! must never change.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A patient's critical facts, flattened for offline transport.
///
/// One value is built fresh per encode and per decode; nothing mutates an
/// existing payload. The three collections are always present, even when
/// empty — a receiver must be able to distinguish "no allergies recorded"
/// from "field missing" (the latter invalidates the whole payload).
///
/// Every field is a primitive string or number. Nothing nests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyData {
  /// Full display name: first and last name joined by a single space.
  #[serde(rename = "n")]
  pub name: String,

  /// Blood-type code (`A+` … `O-`), or empty when unknown.
  #[serde(rename = "b")]
  pub blood_type: String,

  /// Allergy names, in record order.
  #[serde(rename = "a")]
  pub allergies: Vec<String>,

  /// Chronic-disease names, in record order.
  #[serde(rename = "c")]
  pub chronic_diseases: Vec<String>,

  /// Names of medications that were active at projection time.
  #[serde(rename = "m")]
  pub medications: Vec<String>,

  /// Emergency contact phone number; may be empty.
  #[serde(rename = "e", default)]
  pub emergency_contact: String,

  /// Creation time in epoch milliseconds. `0` means unknown; receivers
  /// treat an unknown creation time as maximally stale.
  #[serde(rename = "t", default)]
  pub created_ms: i64,
}

impl EmergencyData {
  /// Age of this payload as seen at `now`.
  ///
  /// `None` when the creation time is unknown (`t == 0`) or claims to be in
  /// the future — a receiver should treat both as "freshness unknown" rather
  /// than trusting a nonsensical clock.
  pub fn age_at(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
    if self.created_ms <= 0 {
      return None;
    }
    let created = DateTime::from_timestamp_millis(self.created_ms)?;
    let age = now.signed_duration_since(created);
    (age >= TimeDelta::zero()).then_some(age)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
