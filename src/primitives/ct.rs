//! Constant-time comparison and selection utilities.
//!
//! Every function in this module compiles to straight-line code: the result
//! is computed from both operands with bitwise arithmetic and returned as a
//! [`Choice`], which the `subtle` crate passes through an optimization
//! barrier so the compiler cannot turn it back into a branch.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time ordering test.
///
/// Implementations must evaluate both operands completely and must not
/// introduce data-dependent branches, early exits or variable-time
/// instructions.
pub trait ConstantTimeGeq {
    /// Returns a truthy [`Choice`] if `self >= other`, in constant time.
    fn ct_geq(&self, other: &Self) -> Choice;
}

impl ConstantTimeGeq for u32 {
    /// `a >= b` is `!(b > a)`, using `subtle`'s bitwise `ct_gt`.
    #[inline(always)]
    fn ct_geq(&self, other: &Self) -> Choice {
        !other.ct_gt(self)
    }
}

impl ConstantTimeGeq for u64 {
    /// Compares the high and low 32-bit halves separately and combines them:
    /// `hi_gt | (hi_eq & lo_geq)`.
    #[inline(always)]
    fn ct_geq(&self, other: &Self) -> Choice {
        let (a_hi, a_lo) = split_u64(*self);
        let (b_hi, b_lo) = split_u64(*other);

        let hi_gt = a_hi.ct_gt(&b_hi);
        let hi_eq = a_hi.ct_eq(&b_hi);
        let lo_geq = a_lo.ct_geq(&b_lo);

        hi_gt | (hi_eq & lo_geq)
    }
}

/// Returns a truthy [`Choice`] if `a >= b`, in constant time.
#[inline(always)]
pub fn ct_geq_u64(a: u64, b: u64) -> Choice {
    a.ct_geq(&b)
}

/// Returns `a` if `choice` is truthy, `b` otherwise, in constant time.
#[inline(always)]
pub fn ct_select_u8(choice: Choice, a: u8, b: u8) -> u8 {
    u8::conditional_select(&b, &a, choice)
}

#[inline(always)]
fn split_u64(v: u64) -> (u32, u32) {
    ((v >> 32) as u32, v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_both_halves() {
        assert_eq!(split_u64(0x0123_4567_89AB_CDEF), (0x0123_4567, 0x89AB_CDEF));
        assert_eq!(split_u64(u64::MAX), (u32::MAX, u32::MAX));
    }

    #[test]
    fn u32_geq_boundaries() {
        assert!(bool::from(0u32.ct_geq(&0)));
        assert!(bool::from(u32::MAX.ct_geq(&(u32::MAX - 1))));
        assert!(!bool::from((u32::MAX - 1).ct_geq(&u32::MAX)));
    }
}
