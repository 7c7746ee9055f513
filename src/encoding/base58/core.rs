//! Constant-time Base58 encoder.
//!
//! The input is copied into a private limb array which is repeatedly divided
//! by `58^5`. Which limbs take part in each division, where each digit is
//! written, and how many batches run are all derived from the input length
//! and the requested output length, never from the input value.

use super::EncodeParams;
use super::alphabet::ct_digit_to_char;
use super::limbs::{BATCH_BITS, BATCH_DIGITS, LIMB_BITS, div58, pack_limbs};
use super::params::Base58Error;

use zeroize::Zeroize;

/// Encodes `input` into exactly `out.len()` Base58 characters, in constant
/// time.
///
/// The most significant digit lands at `out[0]`. Values that need more
/// digits than `out.len()` lose their high-order digits.
///
/// # Algorithm
///
/// 1. Repack the input into big-endian `u32` limbs.
/// 2. For every batch of five output digits, divide the active limbs by
///    `58^5` and map the five remainder digits to characters.
/// 3. After each batch the value has lost at least 29 bits, so limbs that
///    are known to be zero are dropped from the next division.
pub fn encode_to_slice(input: &[u8], out: &mut [u8]) {
    let mut limbs = pack_limbs(input);
    let len = out.len();
    let mut deleted_bits = 0usize;

    for batch_start in (0..len).step_by(BATCH_DIGITS) {
        let active = (deleted_bits / LIMB_BITS).min(limbs.len());
        let digits = div58(&mut limbs[active..]);

        for (j, &digit) in digits.iter().enumerate() {
            if batch_start + j < len {
                out[len - 1 - batch_start - j] = ct_digit_to_char(digit);
            }
        }

        deleted_bits += BATCH_BITS;
    }

    limbs.zeroize();
}

/// Encodes `input` into a Base58 string of exactly `result_len` characters,
/// in constant time.
///
/// Suitable for secret material such as private keys. See
/// [`encode_to_slice`] for the truncation rule.
pub fn encode(input: &[u8], result_len: usize) -> String {
    let mut out = vec![0u8; result_len];
    encode_to_slice(input, &mut out);

    super::into_ascii_string(out)
}

/// Constant-time encoding with a truncation check.
///
/// The check itself runs only when `params.truncation` is not
/// [`Allow`](super::TruncationPolicy::Allow), and it inspects the value in
/// variable time. Use it while developing, not on production secrets.
pub fn encode_with(input: &[u8], params: &EncodeParams) -> Result<String, Base58Error> {
    params.check(input)?;

    Ok(encode(input, params.result_len))
}
