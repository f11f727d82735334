use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// Roman numeral conversion only covers 1..=39.
    #[error("number {0} is outside the roman numeral range 1..=39")]
    RomanOutOfRange(u32),

    /// Matrix rotation requires every row to be as long as the matrix is tall.
    #[error("matrix is not square: {rows} rows but row {row} has {len} columns")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// The next digit permutation does not fit in a `u64`.
    #[error("next permutation of {0} overflows u64")]
    Overflow(u64),

    /// Malformed command line input.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed JSON input or output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
