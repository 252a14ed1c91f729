//! Projection from a full medical card down to the emergency payload.
//!
//! This is the one place that decides what "critical information" means:
//! name, blood type, allergy and chronic-disease names, active medications,
//! and the emergency contact. It also owns the active-medication policy.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
  emergency::EmergencyData,
  record::{MedicalCard, Medication},
};

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Source of the current time.
///
/// Injected wherever a wall-clock read would otherwise be ambient, so the
/// medication-activity cutoff and the payload timestamp are controllable in
/// tests.
pub trait Clock {
  fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// Whether `med` is still active as seen from `today`.
///
/// No end date means open-ended treatment; an end date keeps the medication
/// active only while it is strictly in the future. A medication ending today
/// is already out.
fn is_active(med: &Medication, today: NaiveDate) -> bool {
  match med.ends_on {
    None          => true,
    Some(ends_on) => ends_on > today,
  }
}

/// Reduce `card` to the emergency subset.
///
/// Never fails: a missing patient or absent collection degrades to empty
/// strings and arrays. Input order of the collections is preserved; nothing
/// is de-duplicated or filtered beyond the medication-activity rule. The
/// payload timestamp is `clock.now()` at the moment of projection.
pub fn project(card: &MedicalCard, clock: &impl Clock) -> EmergencyData {
  let now = clock.now();
  let today = now.date_naive();

  let name = card
    .patient
    .as_ref()
    .map(|p| format!("{} {}", p.first_name, p.last_name).trim().to_string())
    .unwrap_or_default();

  let emergency_contact = card
    .patient
    .as_ref()
    .map(|p| p.contact_phone.clone())
    .unwrap_or_default();

  EmergencyData {
    name,
    blood_type: card.blood_type.clone(),
    allergies: card.allergies.iter().map(|a| a.name.clone()).collect(),
    chronic_diseases: card
      .chronic_diseases
      .iter()
      .map(|c| c.name.clone())
      .collect(),
    medications: card
      .medications
      .iter()
      .filter(|m| is_active(m, today))
      .map(|m| m.name.clone())
      .collect(),
    emergency_contact,
    created_ms: now.timestamp_millis(),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
