//! [`EmergencyData`] → URL-safe token.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use lifetag_core::EmergencyData;

use crate::error::Result;

/// Encode `data` as a base64url token with no padding.
///
/// The output never contains `+`, `/`, or `=`, so it can sit in a URL
/// fragment or an NDEF URI record without percent-encoding concerns.
/// Serialization failure is surfaced to the caller, never swallowed —
/// the encoder only ever runs on payloads this workspace built itself.
pub fn encode(data: &EmergencyData) -> Result<String> {
  let json = serde_json::to_string(data)?;
  Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
