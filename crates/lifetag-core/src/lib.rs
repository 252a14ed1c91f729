//! Core types and the projection step for the lifetag emergency codec.
//!
//! This crate is deliberately free of encoding and I/O dependencies. It holds
//! the [`EmergencyData`] wire payload, the full medical-card record types the
//! dashboard hands over, and the projection that reduces one to the other.
//! The token codec and any front end depend on it; it depends on nothing
//! heavier than `chrono` and `serde`.

pub mod emergency;
pub mod error;
pub mod project;
pub mod record;

pub use emergency::EmergencyData;
pub use error::{Error, Result};
pub use project::{Clock, SystemClock, project};
