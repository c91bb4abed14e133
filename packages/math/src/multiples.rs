//! Sum of the multiples of 3 or 5 below a bound, computed three ways.

use crate::series::arithmetic_series;
use std::fmt;

/// Largest bound whose sum still fits in a `u64`.
pub const MAX_BOUND: u64 = 8_891_427_027;

/// Combine per-step sums into the sum over multiples of 3 or 5.
///
/// Multiples of 15 are counted by both the 3 and the 5 term, so they are
/// subtracted once. `sum_of(step)` must return the sum of the multiples of
/// `step` below the bound the caller has in mind.
///
/// The 15 term is taken off the 3 term before the 5 term is added, so no
/// intermediate value exceeds the final sum.
///
/// # Example
///
/// ```
/// use math::multiples::inclusion_exclusion;
///
/// let below_ten = inclusion_exclusion(|step| (0..10u64).step_by(step as usize).sum());
/// assert_eq!(below_ten, 23);
/// ```
pub fn inclusion_exclusion<F>(mut sum_of: F) -> u64
where
    F: FnMut(u64) -> u64,
{
    sum_of(3) - sum_of(15) + sum_of(5)
}

/// Check every number below `bound`.
///
/// # Panics
///
/// Overflows when `bound` is above [`MAX_BOUND`] (a panic in debug builds).
pub fn sum_multiples_naive(bound: u64) -> u64 {
    (0..bound).filter(|n| n % 3 == 0 || n % 5 == 0).sum()
}

/// Skip straight from one multiple to the next and subtract the overlap.
///
/// # Panics
///
/// Overflows when `bound` is above [`MAX_BOUND`] (a panic in debug builds).
pub fn sum_multiples_steps(bound: u64) -> u64 {
    inclusion_exclusion(|step| (0..bound).step_by(step as usize).sum())
}

/// Constant time: each term is a closed-form arithmetic series.
///
/// # Example
///
/// ```
/// use math::multiples::sum_multiples_direct;
///
/// assert_eq!(sum_multiples_direct(1_000_000), 233_333_166_668);
/// ```
///
/// # Panics
///
/// Overflows when `bound` is above [`MAX_BOUND`] (a panic in debug builds).
pub fn sum_multiples_direct(bound: u64) -> u64 {
    inclusion_exclusion(|step| arithmetic_series(0, bound, step))
}

/// The available ways to compute the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Naive,
    Steps,
    Direct,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Steps, Strategy::Direct];

    /// Function name used when reporting on this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "sum_multiples_naive",
            Strategy::Steps => "sum_multiples_steps",
            Strategy::Direct => "sum_multiples_direct",
        }
    }

    pub fn sum(self, bound: u64) -> u64 {
        match self {
            Strategy::Naive => sum_multiples_naive(bound),
            Strategy::Steps => sum_multiples_steps(bound),
            Strategy::Direct => sum_multiples_direct(bound),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
