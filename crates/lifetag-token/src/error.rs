//! Error types for the lifetag-token codec.
//!
//! Every decode failure mode is a distinct variant so the "always total"
//! contract of [`crate::decode`] stays auditable; the public boundary
//! collapses all of them to a single no-data result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("empty token")]
  Empty,

  #[error("invalid base64: {0}")]
  Base64(#[from] base64::DecodeError),

  #[error("token bytes are not UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
