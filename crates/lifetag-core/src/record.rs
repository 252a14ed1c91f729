//! The full medical-card record, as the surrounding dashboard supplies it.
//!
//! These types mirror the camelCase JSON the record source hands over; this
//! crate never persists them. Only a small subset survives projection into
//! [`crate::EmergencyData`] — vaccinations, examinations, diagnoses, and
//! procedures are part of the record but deliberately not part of the
//! emergency payload.
//!
//! Every container defaults field-wise, so a partial payload from an older
//! or trimmed-down API still deserializes and projects.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─── Blood type ──────────────────────────────────────────────────────────────

/// The eight clinical blood-type codes.
///
/// The wire payload carries blood type as a plain string so a foreign tag
/// with an unexpected code still renders; this enum is the write-side
/// vocabulary for sources that validate before projecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
  #[serde(rename = "A+")]
  APositive,
  #[serde(rename = "A-")]
  ANegative,
  #[serde(rename = "B+")]
  BPositive,
  #[serde(rename = "B-")]
  BNegative,
  #[serde(rename = "AB+")]
  AbPositive,
  #[serde(rename = "AB-")]
  AbNegative,
  #[serde(rename = "O+")]
  OPositive,
  #[serde(rename = "O-")]
  ONegative,
}

impl BloodType {
  /// The wire code for this blood type.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::APositive  => "A+",
      Self::ANegative  => "A-",
      Self::BPositive  => "B+",
      Self::BNegative  => "B-",
      Self::AbPositive => "AB+",
      Self::AbNegative => "AB-",
      Self::OPositive  => "O+",
      Self::ONegative  => "O-",
    }
  }
}

impl fmt::Display for BloodType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for BloodType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "A+"  => Ok(Self::APositive),
      "A-"  => Ok(Self::ANegative),
      "B+"  => Ok(Self::BPositive),
      "B-"  => Ok(Self::BNegative),
      "AB+" => Ok(Self::AbPositive),
      "AB-" => Ok(Self::AbNegative),
      "O+"  => Ok(Self::OPositive),
      "O-"  => Ok(Self::ONegative),
      other => Err(Error::UnknownBloodType(other.to_string())),
    }
  }
}

// ─── Patient ─────────────────────────────────────────────────────────────────

/// Identity and contact details for the card's owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
  pub id:             i64,
  pub first_name:     String,
  pub last_name:      String,
  /// National identification number.
  pub pesel:          String,
  pub birth_date:     Option<NaiveDate>,
  pub phone:          String,
  pub address:        String,
  /// Designated emergency contact person.
  pub contact_person: String,
  /// Phone number for the designated contact person.
  pub contact_phone:  String,
}

// ─── Clinical collections ────────────────────────────────────────────────────

/// A recorded allergy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Allergy {
  pub id:          i64,
  pub name:        String,
  pub description: String,
}

/// A chronic disease diagnosis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChronicDisease {
  pub id:           i64,
  pub name:         String,
  pub diagnosed_on: Option<NaiveDate>,
  pub notes:        String,
}

/// A prescribed medication with its treatment window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medication {
  pub id:         i64,
  pub name:       String,
  pub dose:       String,
  pub schedule:   String,
  pub started_on: Option<NaiveDate>,
  /// End of the treatment window; `None` means open-ended.
  pub ends_on:    Option<NaiveDate>,
}

/// An administered vaccination. Not part of the emergency subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vaccination {
  pub id:              i64,
  pub name:            String,
  pub administered_on: Option<NaiveDate>,
  pub dose_number:     u32,
  pub notes:           String,
}

/// A lab or imaging examination. Not part of the emergency subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Examination {
  pub id:           i64,
  pub visit_id:     i64,
  pub kind:         String,
  pub result:       String,
  pub performed_on: Option<NaiveDate>,
}

/// A visit diagnosis. Not part of the emergency subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Diagnosis {
  pub id:          i64,
  pub visit_id:    i64,
  pub icd_code:    String,
  pub description: String,
}

/// A performed procedure. Not part of the emergency subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Procedure {
  pub id:           i64,
  pub visit_id:     i64,
  pub code:         String,
  pub description:  String,
  pub performed_on: Option<NaiveDate>,
}

// ─── Medical card ────────────────────────────────────────────────────────────

/// Everything the dashboard knows about a patient, as one bundle.
///
/// The patient may be absent (a card mid-registration); collections absent
/// from the JSON deserialize as empty rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalCard {
  pub patient:          Option<Patient>,
  /// Blood-type code; empty when not on record.
  pub blood_type:       String,
  pub allergies:        Vec<Allergy>,
  pub chronic_diseases: Vec<ChronicDisease>,
  pub medications:      Vec<Medication>,
  pub vaccinations:     Vec<Vaccination>,
  pub examinations:     Vec<Examination>,
  pub diagnoses:        Vec<Diagnosis>,
  pub procedures:       Vec<Procedure>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blood_type_round_trips_through_str() {
    for code in ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"] {
      let parsed: BloodType = code.parse().unwrap();
      assert_eq!(parsed.to_string(), code);
    }
  }

  #[test]
  fn unknown_blood_type_is_rejected() {
    let err = "X+".parse::<BloodType>().unwrap_err();
    assert!(matches!(err, Error::UnknownBloodType(code) if code == "X+"));
  }

  #[test]
  fn partial_card_json_deserializes_with_empty_collections() {
    let card: MedicalCard = serde_json::from_str(
      r#"{"patient":{"firstName":"Jan","lastName":"Kowalski"},"bloodType":"A+"}"#,
    )
    .unwrap();
    assert_eq!(card.patient.as_ref().unwrap().first_name, "Jan");
    assert_eq!(card.blood_type, "A+");
    assert!(card.allergies.is_empty());
    assert!(card.medications.is_empty());
    assert!(card.vaccinations.is_empty());
  }

  #[test]
  fn medication_end_date_parses_from_camel_case() {
    let med: Medication = serde_json::from_str(
      r#"{"id":7,"name":"Metformin","endsOn":"2031-01-15"}"#,
    )
    .unwrap();
    assert_eq!(med.name, "Metformin");
    assert_eq!(med.ends_on, Some(NaiveDate::from_ymd_opt(2031, 1, 15).unwrap()));
    assert_eq!(med.started_on, None);
  }

  #[test]
  fn explicit_null_end_date_is_open_ended() {
    let med: Medication =
      serde_json::from_str(r#"{"id":7,"name":"Metformin","endsOn":null}"#).unwrap();
    assert_eq!(med.ends_on, None);
  }
}
