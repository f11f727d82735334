//! Next larger number built from the same decimal digits.

use tracing::debug;

use crate::TaskError;

fn decimal_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

/// Smallest number greater than `n` that uses exactly the digits of `n`.
///
/// Returns `n` itself when its digits are already in non-increasing order.
/// Fails with [`TaskError::Overflow`] if that permutation exceeds `u64::MAX`.
pub fn get_nearest_bigger(n: u64) -> Result<u64, TaskError> {
    let mut digits = decimal_digits(n);

    let Some(pivot) = (0..digits.len().saturating_sub(1))
        .rev()
        .find(|&i| digits[i] < digits[i + 1])
    else {
        return Ok(n);
    };

    // Leftmost of the smallest digits that still beat the pivot.
    let mut swap = pivot + 1;
    for i in pivot + 1..digits.len() {
        if digits[i] > digits[pivot] && digits[i] < digits[swap] {
            swap = i;
        }
    }
    debug!(n, pivot, swap, "swapping digits");
    digits.swap(pivot, swap);
    digits[pivot + 1..].sort_unstable();

    digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
        .ok_or(TaskError::Overflow(n))
}
