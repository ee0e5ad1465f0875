/// Returns true when `n` divides evenly by two.
///
/// `%` truncates toward zero, so negative odd numbers leave a remainder of
/// `-1` and are still reported as odd.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Sums every even element of `seq`.
///
/// Overflow behaves like any other `i64` addition: it panics in debug builds
/// and wraps in release builds. Use [`checked_sum_evens`] when the input is
/// not trusted.
pub fn sum_evens(seq: &[i64]) -> i64 {
    seq.iter().copied().filter(|&n| is_even(n)).sum()
}

/// Like [`sum_evens`], but stops at the first addition that would overflow.
pub fn checked_sum_evens(seq: &[i64]) -> Result<i64, SumError> {
    seq.iter()
        .copied()
        .filter(|&n| is_even(n))
        .try_fold(0_i64, |sum, n| {
            sum.checked_add(n).ok_or(SumError::Overflow { sum, next: n })
        })
}

/// Copies the even elements of `seq` into a new vec, keeping their order.
pub fn filter_evens(seq: &[i64]) -> Vec<i64> {
    seq.iter().copied().filter(|&n| is_even(n)).collect()
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SumError {
    #[error("adding {next} to running total {sum} overflowed")]
    Overflow { sum: i64, next: i64 },
}
