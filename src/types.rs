use serde::{Deserialize, Serialize};

/// Square at column `x`, row `y` of a chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Row-major grid. Only square grids are valid input to the matrix routines.
pub type Matrix<T = i64> = Vec<Vec<T>>;
