//! Linear scans over strings, digits and slices.

/// Whether `s` reads the same in both directions, compared char by char.
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    for i in 0..len / 2 {
        if chars[i] != chars[len - 1 - i] {
            return false;
        }
    }
    true
}

/// Char position of the first `ch` in `s`, or `None` if it never occurs.
pub fn get_index_of(s: &str, ch: char) -> Option<usize> {
    for (i, c) in s.chars().enumerate() {
        if c == ch {
            return Some(i);
        }
    }
    None
}

/// Whether the decimal form of `n` contains `digit`. The sign is ignored.
pub fn is_contain_number(n: i64, digit: u8) -> bool {
    let target = u64::from(digit);
    let mut rest = n.unsigned_abs();
    loop {
        if rest % 10 == target {
            return true;
        }
        rest /= 10;
        if rest == 0 {
            return false;
        }
    }
}

/// First index whose left-hand sum equals its right-hand sum.
///
/// The element at the index itself belongs to neither side. The suffix total
/// is computed once; afterwards a single pass moves one element at a time
/// from the right sum to the left sum.
pub fn get_balance_index(arr: &[i64]) -> Option<usize> {
    let mut left: i128 = 0;
    let mut right: i128 = arr.iter().skip(1).map(|&v| i128::from(v)).sum();

    for i in 0..arr.len() {
        if left == right {
            return Some(i);
        }
        left += i128::from(arr[i]);
        if let Some(&next) = arr.get(i + 1) {
            right -= i128::from(next);
        }
    }
    None
}
