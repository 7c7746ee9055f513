//! Branchless digit-to-character mapping.
//!
//! The Bitcoin alphabet skips `0`, `O`, `I` and `l`, so it is made of six
//! contiguous ASCII runs. A table lookup indexed by the digit would leak the
//! digit through the memory access pattern; instead the character is built
//! by starting from the first run and conditionally moving into each later
//! run whose start the digit reaches. Every comparison and selection is
//! evaluated for every digit.

use crate::primitives::{ct_geq_u64, ct_select_u8};

/// `(first digit, first character)` of every run after `1..=9`.
const RUNS: [(u8, u8); 5] = [
    (9, b'A'),  // 'A'..='H'
    (17, b'J'), // 'J'..='N'
    (22, b'P'), // 'P'..='Z'
    (33, b'a'), // 'a'..='k'
    (44, b'm'), // 'm'..='z'
];

/// Maps a digit in `0..58` to its alphabet character in constant time.
#[inline(always)]
pub(crate) fn ct_digit_to_char(digit: u8) -> u8 {
    let mut ch = b'1'.wrapping_add(digit);

    for &(start, first) in RUNS.iter() {
        let candidate = first.wrapping_add(digit).wrapping_sub(start);
        ch = ct_select_u8(ct_geq_u64(digit as u64, start as u64), candidate, ch);
    }

    ch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::base58::ALPHABET;

    #[test]
    fn every_digit_maps_to_alphabet_entry() {
        for digit in 0..58u8 {
            assert_eq!(
                ct_digit_to_char(digit),
                ALPHABET[digit as usize],
                "digit {digit}"
            );
        }
    }

    #[test]
    fn run_boundaries() {
        assert_eq!(ct_digit_to_char(8), b'9');
        assert_eq!(ct_digit_to_char(16), b'H');
        assert_eq!(ct_digit_to_char(21), b'N');
        assert_eq!(ct_digit_to_char(32), b'Z');
        assert_eq!(ct_digit_to_char(43), b'k');
        assert_eq!(ct_digit_to_char(57), b'z');
    }
}
