//! Barrett reduction by a fixed single-word divisor.
//!
//! Hardware division instructions take a number of cycles that depends on
//! the operand values on many CPUs, which makes them unusable on secret
//! data. A [`Barrett`] divisor replaces the division with two fixed-width
//! multiplications and one branchless correction step.
//!
//! ## Correctness bound
//!
//! With `m = floor(2^64 / d)` and any `n < 2^64`, the estimate
//! `q' = floor(n * m / 2^64)` satisfies `q - 1 <= q' <= q`, where `q` is the
//! exact quotient. The remainder estimate `n - q' * d` is therefore below
//! `2d`, and a single conditional subtraction of `d` yields the exact
//! result. This holds for every `d` in `2..=2^63`.

use super::ct::ct_geq_u64;

use subtle::ConditionallySelectable;

/// A divisor with its precomputed Barrett multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Barrett {
    divisor: u64,
    multiplier: u64,
}

impl Barrett {
    /// Precomputes the multiplier `floor(2^64 / divisor)`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is outside `2..=2^63`. All divisors used by the
    /// crate are constants, so the check happens at compile time.
    pub const fn new(divisor: u64) -> Self {
        assert!(divisor >= 2 && divisor <= 1 << 63, "unsupported Barrett divisor");

        Barrett {
            divisor,
            multiplier: ((1u128 << 64) / divisor as u128) as u64,
        }
    }

    /// The divisor `d`.
    #[inline(always)]
    pub const fn divisor(&self) -> u64 {
        self.divisor
    }

    /// The multiplier `floor(2^64 / d)`.
    #[inline(always)]
    pub const fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns `(n / d, n % d)` in constant time.
    ///
    /// The instruction sequence is the same for every `n`: one high-half
    /// multiplication for the estimate, one low-half multiplication for the
    /// remainder, and a masked correction.
    #[inline(always)]
    pub fn div_rem(&self, n: u64) -> (u64, u64) {
        let d = self.divisor;

        let mut q = mul_hi(n, self.multiplier);
        let mut r = n.wrapping_sub(q.wrapping_mul(d));

        let fix = ct_geq_u64(r, d);
        q.conditional_assign(&q.wrapping_add(1), fix);
        r.conditional_assign(&r.wrapping_sub(d), fix);

        (q, r)
    }
}

/// High 64 bits of the 128-bit product `a * b`.
#[inline(always)]
fn mul_hi(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) >> 64) as u64
}
