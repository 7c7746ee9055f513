//! Constant-time Base58 encoding
//!
//! This crate converts a byte buffer into a Base58 string of an explicitly
//! requested length, under two execution contracts:
//!
//! - a **constant-time** path for secrets (private keys, seeds, tokens),
//!   whose instruction sequence, branch outcomes and memory accesses depend
//!   only on the input length and the requested output length;
//! - a **vartime** path for public data, built on arbitrary-precision
//!   division and noticeably faster.
//!
//! # Module overview
//!
//! - `primitives`
//!   Constant-time building blocks: a branchless `>=` comparison on 32- and
//!   64-bit words and a Barrett divisor that replaces hardware division
//!   (whose latency depends on the operands on many CPUs) by two
//!   multiplications and a single branchless correction.
//!
//! - `encoding`
//!   The Base58 encoders. The constant-time encoder repacks the input into
//!   `u32` limbs and peels off five digits per division by `58^5`; the
//!   vartime encoder divides a big integer by `58^10`. The two share only
//!   the alphabet.
//!
//! # Example
//!
//! ```
//! use ctbase58::encoding::base58::{encode, encoded_len, vartime_encode};
//!
//! let key = [0xFFu8; 32];
//! let len = encoded_len(key.len());
//!
//! assert_eq!(encode(&key, len), vartime_encode(&key, len));
//! assert_eq!(encode(&[0xFF], 2), "5Q");
//! ```
//!
//! # Design goals
//!
//! - Total functions: no error path and no panic depends on the input value
//! - Fixed-length output, with truncation of high-order digits as a
//!   documented contract
//! - Call-local state only; every function is safe to call from many threads
//!
//! Decoding and checksummed formats (Base58Check) are not provided.

pub mod encoding;
pub mod primitives;

pub use encoding::base58::{encode, vartime_encode};
