//! Closed-form sums of arithmetic progressions.

/// Sum of the multiples of `step` in `[start, stop)`.
///
/// Finds the first and last multiple of `step` inside the range, counts the
/// terms and returns `count * (first + last) / 2` without iterating.
/// Returns 0 when the range holds no multiple of `step`.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// # Example
///
/// ```
/// use math::series::arithmetic_series;
///
/// // 0 + 3 + 6 + 9
/// assert_eq!(arithmetic_series(0, 10, 3), 18);
/// // 0 + 5
/// assert_eq!(arithmetic_series(0, 10, 5), 5);
/// ```
pub fn arithmetic_series(start: u64, stop: u64, step: u64) -> u64 {
    if stop <= start {
        return 0;
    }
    let first = start.div_ceil(step) * step;
    let last = (stop - 1) / step * step;
    if first > last {
        return 0;
    }
    let count = (last - first) / step + 1;
    // One of count or (first + last) is always even.
    if count % 2 == 0 {
        count / 2 * (first + last)
    } else {
        count * ((first + last) / 2)
    }
}
