//! Offline emergency-data token codec.
//!
//! Converts between [`lifetag_core::EmergencyData`] and the compact,
//! URL-safe token written to NFC tags and embedded in shareable links.
//! Pure synchronous; no I/O, no network — a receiver that already holds the
//! token needs nothing else to render the payload.
//!
//! # Quick start
//!
//! ```
//! use lifetag_token::{CardRoute, NoLocation, decode_fragment, smart_poster_url};
//!
//! let data = lifetag_core::EmergencyData {
//!   name:              "Jan Kowalski".to_string(),
//!   blood_type:        "A+".to_string(),
//!   allergies:         vec!["Penicillin".to_string()],
//!   chronic_diseases:  vec![],
//!   medications:       vec!["Metformin".to_string()],
//!   emergency_contact: "+48123456789".to_string(),
//!   created_ms:        1_700_000_000_000,
//! };
//!
//! let url = smart_poster_url(&data, None, CardRoute::Children, &NoLocation).unwrap();
//! assert_eq!(decode_fragment(&url), Some(data));
//! ```

pub mod error;

mod decode;
mod encode;
mod url;

pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use url::{
  CardRoute, DEFAULT_BASE, Location, LocationSource, NoLocation,
  decode_fragment, fragment, smart_poster_url,
};

// ─── Round-trip tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod roundtrip_tests {
  use lifetag_core::EmergencyData;

  use super::{test_helpers::{jan_kowalski, zaneta}, *};

  #[test]
  fn full_payload_round_trips_field_for_field() {
    let data = jan_kowalski();
    let token = encode(&data).unwrap();
    let back = decode(&token).expect("round trip lost the payload");
    assert_eq!(back, data);
    // The timestamp travels with the token; it is never re-derived.
    assert_eq!(back.created_ms, 1_700_000_000_000);
  }

  #[test]
  fn non_ascii_names_survive_the_round_trip() {
    let data = zaneta();
    let back = decode(&encode(&data).unwrap()).unwrap();
    assert_eq!(back.name, "Żaneta Łęcka");
    assert_eq!(back.allergies, vec!["Orzechy włoskie"]);
    assert_eq!(back, data);
  }

  #[test]
  fn empty_strings_and_arrays_survive_the_round_trip() {
    let data = EmergencyData {
      name:              String::new(),
      blood_type:        String::new(),
      allergies:         vec![],
      chronic_diseases:  vec![],
      medications:       vec![],
      emergency_contact: String::new(),
      created_ms:        1,
    };
    assert_eq!(decode(&encode(&data).unwrap()), Some(data));
  }

  #[test]
  fn empty_collections_stay_distinguishable_from_missing_ones() {
    let token = encode(&EmergencyData {
      name:              "x".to_string(),
      blood_type:        "O-".to_string(),
      allergies:         vec![],
      chronic_diseases:  vec![],
      medications:       vec![],
      emergency_contact: String::new(),
      created_ms:        5,
    })
    .unwrap();
    let back = decode(&token).unwrap();
    assert!(back.allergies.is_empty());
    assert!(back.chronic_diseases.is_empty());
    assert!(back.medications.is_empty());
  }
}

// ─── Shared test helpers ──────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_helpers {
  use lifetag_core::EmergencyData;

  /// The canonical all-fields-populated payload used across the test suite.
  pub(crate) fn jan_kowalski() -> EmergencyData {
    EmergencyData {
      name:              "Jan Kowalski".to_string(),
      blood_type:        "A+".to_string(),
      allergies:         vec!["Penicillin".to_string()],
      chronic_diseases:  vec![],
      medications:       vec!["Metformin".to_string()],
      emergency_contact: "+48123456789".to_string(),
      created_ms:        1_700_000_000_000,
    }
  }

  /// A payload exercising non-ASCII text in every string collection.
  pub(crate) fn zaneta() -> EmergencyData {
    EmergencyData {
      name:              "Żaneta Łęcka".to_string(),
      blood_type:        "AB-".to_string(),
      allergies:         vec!["Orzechy włoskie".to_string()],
      chronic_diseases:  vec!["Astma".to_string()],
      medications:       vec![],
      emergency_contact: String::new(),
      created_ms:        1_700_000_000_000,
    }
  }
}
