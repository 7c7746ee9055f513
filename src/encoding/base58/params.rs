//! Output length selection and truncation diagnostics.
//!
//! Both encoders produce exactly the requested number of characters and
//! silently drop high-order digits that do not fit. That behavior is part of
//! the contract (fixed-width encodings rely on it), but an unintended
//! truncation is easy to miss. [`EncodeParams`] lets callers opt into a check.

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use num_bigint::BigUint;

/// `log2(58)` scaled by `10^9` and rounded down.
const LOG2_58_E9: u128 = 5_857_980_995;

/// What to do when the encoded value needs more digits than requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Drop the high-order digits without looking at the value.
    #[default]
    Allow,
    /// Drop the high-order digits and emit a `log` warning.
    Warn,
    /// Refuse to encode and return [`Base58Error::Truncated`].
    Deny,
}

/// Errors reported by the checked encoding entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Error {
    /// The value needs `required` digits but only `result_len` were requested.
    Truncated { required: usize, result_len: usize },
}

impl Display for Base58Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Base58Error::Truncated {
                required,
                result_len,
            } => write!(
                f,
                "value needs {required} base58 digits but only {result_len} were requested"
            ),
        }
    }
}

impl std::error::Error for Base58Error {}

/// Parameters for [`encode_with`](super::encode_with) and
/// [`vartime_encode_with`](super::vartime_encode_with).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeParams {
    /// Exact number of characters to produce.
    pub result_len: usize,
    /// Behavior when the value does not fit in `result_len` digits.
    pub truncation: TruncationPolicy,
}

impl EncodeParams {
    pub fn new(result_len: usize) -> Self {
        Self {
            result_len,
            truncation: TruncationPolicy::Allow,
        }
    }

    /// Parameters wide enough for any input of `byte_len` bytes.
    pub fn for_input_len(byte_len: usize) -> Self {
        Self::new(encoded_len(byte_len))
    }

    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    /// Applies the truncation policy to `input`.
    ///
    /// Under [`TruncationPolicy::Allow`] the value is never read. The other
    /// policies count digits in variable time.
    pub(crate) fn check(&self, input: &[u8]) -> Result<(), Base58Error> {
        if self.truncation == TruncationPolicy::Allow {
            return Ok(());
        }

        let required = significant_digits(input);
        if required <= self.result_len {
            return Ok(());
        }

        match self.truncation {
            TruncationPolicy::Allow => Ok(()),
            TruncationPolicy::Warn => {
                warn!(
                    "base58 output truncated: value needs {} digits, {} requested",
                    required, self.result_len
                );
                Ok(())
            }
            TruncationPolicy::Deny => {
                debug!(
                    "rejecting base58 encode: value needs {} digits, {} requested",
                    required, self.result_len
                );
                Err(Base58Error::Truncated {
                    required,
                    result_len: self.result_len,
                })
            }
        }
    }
}

/// Smallest length that holds every value of `byte_len` bytes, i.e. the
/// smallest `L` with `58^L >= 256^byte_len`.
///
/// Computed as `ceil(8 * byte_len / log2(58))` in fixed point. The scaled
/// constant is rounded down, so the result never under-estimates.
pub const fn encoded_len(byte_len: usize) -> usize {
    let scaled_bits = byte_len as u128 * 8 * 1_000_000_000;

    scaled_bits.div_ceil(LOG2_58_E9) as usize
}

/// Number of base-58 digits in the value of `input`, without leading zeros.
///
/// Returns `0` for an empty or all-zero input. Runs in variable time.
pub fn significant_digits(input: &[u8]) -> usize {
    let value = BigUint::from_bytes_be(input);
    let base = BigUint::from(58u8);

    let mut bound = BigUint::from(1u8);
    let mut digits = 0;

    while bound <= value {
        bound *= &base;
        digits += 1;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_common_sizes() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 2);
        assert_eq!(encoded_len(20), 28);
        assert_eq!(encoded_len(32), 44);
        assert_eq!(encoded_len(64), 88);
    }

    #[test]
    fn significant_digits_small_values() {
        assert_eq!(significant_digits(&[]), 0);
        assert_eq!(significant_digits(&[0, 0]), 0);
        assert_eq!(significant_digits(&[1]), 1);
        assert_eq!(significant_digits(&[57]), 1);
        assert_eq!(significant_digits(&[58]), 2);
        assert_eq!(significant_digits(&[0xFF]), 2);
    }

    #[test]
    fn allow_never_fails() {
        let params = EncodeParams::new(1);
        assert_eq!(params.check(&[0xFF; 32]), Ok(()));
    }
}
