//! URL-safe token → [`EmergencyData`].
//!
//! The decoder is the boundary against untrusted input: a scanned tag can
//! contain anything, so whatever arrives here must come back as either a
//! complete payload or `None` — never a panic, never an error escaping
//! [`decode`].

use base64::{
  Engine as _,
  alphabet,
  engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use lifetag_core::EmergencyData;

use crate::error::{Error, Result};

/// Standard-alphabet engine that accepts both padded and unpadded input.
///
/// Tokens from this workspace arrive unpadded in the URL-safe alphabet and
/// are mapped back to the standard one before decoding; tokens from writers
/// that kept the `=` padding or never applied the URL-safe rewrite decode
/// just the same.
const B64_FORGIVING: GeneralPurpose = GeneralPurpose::new(
  &alphabet::STANDARD,
  GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a scanned token.
///
/// Total over arbitrary input: empty strings, corrupt encodings, truncated
/// tokens, and structurally wrong payloads all yield `None`.
pub fn decode(token: &str) -> Option<EmergencyData> {
  try_decode(token).ok()
}

/// The decoder proper, with the failure reason intact.
///
/// Kept separate from [`decode`] so the collapse to "no data" happens in
/// exactly one place and each failure mode stays a distinct [`Error`]
/// variant.
pub(crate) fn try_decode(token: &str) -> Result<EmergencyData> {
  let token = token.trim();
  if token.is_empty() {
    return Err(Error::Empty);
  }

  // Undo the URL-safe rewrite (`-`→`+`, `_`→`/`).
  let standard: String = token
    .chars()
    .map(|c| match c {
      '-' => '+',
      '_' => '/',
      c   => c,
    })
    .collect();

  let bytes = B64_FORGIVING.decode(standard.as_bytes())?;
  let json = String::from_utf8(bytes)?;

  // serde enforces the structural contract: `n` and `b` must be strings,
  // `a`/`c`/`m` must be arrays; `e`/`t` default when absent. Unknown extra
  // fields are ignored for forward tolerance.
  let data: EmergencyData = serde_json::from_str(&json)?;
  Ok(data)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
