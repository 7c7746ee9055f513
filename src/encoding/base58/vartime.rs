//! Variable-time Base58 encoder.
//!
//! Uses arbitrary-precision division by `58^10`, which still fits in a `u64`,
//! so each chunk of ten digits is split with native arithmetic. The cost of
//! every division depends on the magnitude of the value.
//!
//! **Never use this encoder on secret data.**

use super::params::Base58Error;
use super::{ALPHABET, EncodeParams};

use log::trace;
use num_bigint::BigUint;
use num_integer::Integer;

const CHUNK_DIGITS: usize = 10;

/// `58^10 < 2^64`.
const RADIX_CHUNK: u64 = 58u64.pow(CHUNK_DIGITS as u32);

/// Encodes `input` into exactly `out.len()` Base58 characters.
///
/// Same output contract as [`encode_to_slice`](super::encode_to_slice),
/// without the constant-time guarantee.
pub fn vartime_encode_to_slice(input: &[u8], out: &mut [u8]) {
    let len = out.len();
    trace!("vartime base58: {} bytes into {} digits", input.len(), len);

    let radix = BigUint::from(RADIX_CHUNK);
    let mut value = BigUint::from_bytes_be(input);

    for chunk_start in (0..len).step_by(CHUNK_DIGITS) {
        let (quotient, remainder) = value.div_rem(&radix);
        value = quotient;

        let mut rem = remainder.iter_u64_digits().next().unwrap_or(0);

        for j in 0..CHUNK_DIGITS.min(len - chunk_start) {
            out[len - 1 - chunk_start - j] = ALPHABET[(rem % 58) as usize];
            rem /= 58;
        }
    }
}

/// Encodes `input` into a Base58 string of exactly `result_len` characters.
///
/// Faster than [`encode`](super::encode) but its running time depends on
/// the input value.
pub fn vartime_encode(input: &[u8], result_len: usize) -> String {
    let mut out = vec![0u8; result_len];
    vartime_encode_to_slice(input, &mut out);

    super::into_ascii_string(out)
}

/// Variable-time encoding with a truncation check.
pub fn vartime_encode_with(input: &[u8], params: &EncodeParams) -> Result<String, Base58Error> {
    params.check(input)?;

    Ok(vartime_encode(input, params.result_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_fits_in_u64() {
        assert_eq!(RADIX_CHUNK, 430_804_206_899_405_824);
    }

    #[test]
    fn crosses_chunk_boundary() {
        // 58^10 is "2" followed by ten '1's.
        let bytes = RADIX_CHUNK.to_be_bytes();
        assert_eq!(vartime_encode(&bytes, 11), "21111111111");
        assert_eq!(vartime_encode(&bytes, 10), "1111111111");
    }
}
