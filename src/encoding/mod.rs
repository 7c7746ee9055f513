//! Binary-to-text encodings exposed by the crate.
//!
//! Currently includes fixed-length Base58 with a constant-time and a
//! variable-time encoder.

pub mod base58;

/// Re-export of the two Base58 encoders.
pub use base58::{encode, vartime_encode};
