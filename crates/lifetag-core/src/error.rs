//! Error types for `lifetag-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown blood type: {0:?}")]
  UnknownBloodType(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
