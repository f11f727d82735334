//! Square matrix generation and rotation.

use crate::types::Matrix;
use crate::TaskError;

/// Fill a `size` x `size` grid with `1..=size²` in clockwise spiral order.
///
/// Four boundaries shrink inward after each side is written: top row left to
/// right, right column downwards, bottom row right to left, left column
/// upwards. The fill stops as soon as two opposite boundaries cross.
pub fn get_spiral_matrix(size: usize) -> Matrix<u64> {
    let mut matrix = vec![vec![0u64; size]; size];
    if size == 0 {
        return matrix;
    }

    let (mut top, mut bottom) = (0usize, size - 1);
    let (mut left, mut right) = (0usize, size - 1);
    let mut value = 1u64;

    loop {
        for col in left..=right {
            matrix[top][col] = value;
            value += 1;
        }
        top += 1;
        if top > bottom {
            break;
        }

        for row in top..=bottom {
            matrix[row][right] = value;
            value += 1;
        }
        if right == left {
            break;
        }
        right -= 1;

        for col in (left..=right).rev() {
            matrix[bottom][col] = value;
            value += 1;
        }
        if bottom == top {
            break;
        }
        bottom -= 1;

        for row in (top..=bottom).rev() {
            matrix[row][left] = value;
            value += 1;
        }
        left += 1;
        if left > right {
            break;
        }
    }

    matrix
}

/// Rotate a square matrix 90° clockwise in place and hand it back.
///
/// Works ring by ring from the outside in, cycling four elements at a time,
/// so no second grid is allocated. Non-square input is rejected before any
/// element moves.
pub fn rotate_matrix<T: Copy>(matrix: &mut Matrix<T>) -> Result<&mut Matrix<T>, TaskError> {
    let n = matrix.len();
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(TaskError::NotSquare {
            rows: n,
            row,
            len: r.len(),
        });
    }

    for layer in 0..n / 2 {
        let last = n - 1 - layer;
        for i in layer..last {
            let offset = i - layer;
            let top = matrix[layer][i];
            matrix[layer][i] = matrix[last - offset][layer];
            matrix[last - offset][layer] = matrix[last][last - offset];
            matrix[last][last - offset] = matrix[i][last];
            matrix[i][last] = top;
        }
    }

    Ok(matrix)
}
