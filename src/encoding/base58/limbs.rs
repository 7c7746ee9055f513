//! Limb representation and in-place division by 58^5.
//!
//! The constant-time encoder works on a big-endian array of `u32` limbs.
//! Each call to [`div58`] divides the whole array by `58^5` and returns the
//! five base-58 digits of the remainder, least significant first.

use crate::primitives::Barrett;

/// Number of base-58 digits produced per [`div58`] call.
pub const BATCH_DIGITS: usize = 5;

/// Bits of magnitude removed per batch.
///
/// `log2(58) > 5.857 > 29 / 5`, so dividing by `58^5` always clears at least
/// 29 bits.
pub(crate) const BATCH_BITS: usize = 29;

pub(crate) const LIMB_BITS: usize = 32;

/// `58^5 = 656356768`, the largest power of 58 below `2^30`.
const DIV_58_POW_5: Barrett = Barrett::new(58u64.pow(BATCH_DIGITS as u32));
const DIV_58: Barrett = Barrett::new(58);

const _: () = assert!(DIV_58_POW_5.multiplier() == 28_104_751_825);
const _: () = assert!(DIV_58.multiplier() == 318_047_311_615_681_924);

/// Packs big-endian bytes into big-endian `u32` limbs.
///
/// The most significant limb comes first and is zero-padded on the high side
/// when the input length is not a multiple of four.
pub fn pack_limbs(input: &[u8]) -> Vec<u32> {
    input
        .rchunks(4)
        .rev()
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, &byte| (acc << 8) | byte as u32)
        })
        .collect()
}

/// Divides `limbs` by `58^5` in place and returns the remainder as five
/// base-58 digits, least significant first.
///
/// Runs in constant time: every limb goes through the same Barrett division,
/// followed by exactly five Barrett divisions by 58.
///
/// Each intermediate `carry << 32 | limb` is below `58^5 * 2^32`, so every
/// quotient fits back into a `u32` limb.
pub fn div58(limbs: &mut [u32]) -> [u8; BATCH_DIGITS] {
    let mut carry = 0u64;

    for limb in limbs.iter_mut() {
        let (q, r) = DIV_58_POW_5.div_rem((carry << LIMB_BITS) | *limb as u64);
        *limb = q as u32;
        carry = r;
    }

    let mut digits = [0u8; BATCH_DIGITS];

    for digit in digits.iter_mut() {
        let (q, r) = DIV_58.div_rem(carry);
        *digit = r as u8;
        carry = q;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_pads_the_high_limb() {
        assert_eq!(pack_limbs(&[]), Vec::<u32>::new());
        assert_eq!(pack_limbs(&[0xAB]), vec![0xAB]);
        assert_eq!(
            pack_limbs(&[0x01, 0x02, 0x03, 0x04, 0x05]),
            vec![0x01, 0x0203_0405]
        );
        assert_eq!(
            pack_limbs(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x11, 0x22, 0x33]),
            vec![0xDEAD_BEEF, 0x0011_2233]
        );
    }

    #[test]
    fn divisor_constants() {
        assert_eq!(DIV_58_POW_5.divisor(), 656_356_768);
        assert_eq!(DIV_58.divisor(), 58);
    }

    #[test]
    fn div58_small_value() {
        // 255 = 4 * 58 + 23
        let mut limbs = [255u32];
        assert_eq!(div58(&mut limbs), [23, 4, 0, 0, 0]);
        assert_eq!(limbs, [0]);
    }

    #[test]
    fn div58_matches_native_division() {
        let value: u64 = 0xFFFF_FFFF_FFFF_FFFF;
        let mut limbs = [u32::MAX, u32::MAX];

        let digits = div58(&mut limbs);

        let d = 58u64.pow(5);
        let quotient = ((limbs[0] as u64) << 32) | limbs[1] as u64;
        assert_eq!(quotient, value / d);

        let mut rem = value % d;
        for digit in digits {
            assert_eq!(digit as u64, rem % 58);
            rem /= 58;
        }
    }

    #[test]
    fn div58_on_empty_array() {
        let mut limbs: [u32; 0] = [];
        assert_eq!(div58(&mut limbs), [0; 5]);
    }
}
