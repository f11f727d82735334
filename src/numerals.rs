//! Roman numerals and spelled-out numbers.

use crate::TaskError;

const UNITS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Largest value [`convert_to_roman_numerals`] accepts.
pub const ROMAN_MAX: u32 = 39;

/// Convert `n` in `1..=39` to Roman numerals.
///
/// Tens are written as repeated `X`, the remainder comes from a fixed table.
pub fn convert_to_roman_numerals(n: u32) -> Result<String, TaskError> {
    if n == 0 || n > ROMAN_MAX {
        return Err(TaskError::RomanOutOfRange(n));
    }
    let mut roman = "X".repeat((n / 10) as usize);
    let unit = n % 10;
    if unit != 0 {
        roman.push_str(UNITS[(unit - 1) as usize]);
    }
    Ok(roman)
}

/// Spell out a numeric string one character at a time.
///
/// Digits become their English names, `-` becomes `minus`, `.` and `,`
/// become `point`. Any other character is kept as is.
pub fn convert_number_to_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 5);
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match c {
            '-' => out.push_str("minus"),
            '.' | ',' => out.push_str("point"),
            '0'..='9' => out.push_str(DIGIT_NAMES[(c as u8 - b'0') as usize]),
            other => out.push(other),
        }
    }
    out
}
