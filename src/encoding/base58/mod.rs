//! Fixed-length Base58 encoding (Bitcoin alphabet).
//!
//! Two independent encoders share the alphabet and nothing else:
//!
//! - [`encode`]: constant time with respect to the input value. The sequence
//!   of operations, branches and memory accesses depends only on the input
//!   length and the requested output length. Use it for keys and secrets.
//! - [`vartime_encode`]: big-integer based and faster, but its running time
//!   depends on the value. Use it for public data only.
//!
//! Both return exactly `result_len` characters, most significant digit
//! first, left-padded with `'1'`. If the value needs more than `result_len`
//! digits, the high-order digits are dropped. [`encoded_len`] gives a length
//! that is always sufficient, and [`EncodeParams`] adds an opt-in truncation
//! check for development.
//!
//! Decoding and Base58Check are out of scope.

mod alphabet;
mod core;
mod limbs;
mod params;
mod vartime;

pub use self::core::{encode, encode_to_slice, encode_with};
pub use limbs::{BATCH_DIGITS, div58, pack_limbs};
pub use params::{Base58Error, EncodeParams, TruncationPolicy, encoded_len, significant_digits};
pub use vartime::{vartime_encode, vartime_encode_to_slice, vartime_encode_with};

/// The Bitcoin Base58 alphabet. Its ordering is a compatibility contract.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Converts an encoder output buffer into a `String`.
///
/// Every byte comes from [`ALPHABET`], so each one is a single-byte `char`.
fn into_ascii_string(out: Vec<u8>) -> String {
    out.into_iter().map(char::from).collect()
}
