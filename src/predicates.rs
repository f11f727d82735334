//! Sign, extremum and board/triangle checks.

use crate::types::Position;

/// Returns `true` if `n` is positive or zero.
pub fn is_positive(n: f64) -> bool {
    n >= 0.0
}

/// Greatest of three values, compared pairwise.
pub fn get_max_number(a: f64, b: f64, c: f64) -> f64 {
    let m = if a >= b { a } else { b };
    if m >= c {
        m
    } else {
        c
    }
}

/// Whether a queen standing on `queen` attacks `king` in one move.
///
/// Blocking pieces are not considered: sharing a row, a column or a
/// diagonal is enough.
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    let same_line = queen.x == king.x || queen.y == king.y;
    let diagonal = queen.x.abs_diff(king.x) == queen.y.abs_diff(king.y);
    same_line || diagonal
}

/// Whether sides `a`, `b`, `c` form a triangle with at least two equal sides.
///
/// Every side must be strictly positive. The triangle inequality is checked
/// non-strictly for all three sides, so a degenerate triangle such as
/// `(1, 1, 2)` still counts.
pub fn is_isosceles_triangle(a: i64, b: i64, c: i64) -> bool {
    if a <= 0 || b <= 0 || c <= 0 {
        return false;
    }
    let (a, b, c) = (i128::from(a), i128::from(b), i128::from(c));
    let valid = a + b >= c && a + c >= b && b + c >= a;
    valid && (a == b || a == c || b == c)
}
