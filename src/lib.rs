//! Small, independent algorithm exercises.
//!
//! Every function is a pure transformation of its arguments: sign and
//! extremum checks, chess and triangle predicates, Roman numerals and
//! spelled-out numbers, string and slice scans, spiral matrices and in-place
//! rotation, quicksort, an iterated character shuffle with period detection,
//! and the next larger permutation of a number's digits.
//!
//! ```
//! use looptasks::{get_spiral_matrix, shuffle_char};
//!
//! assert_eq!(get_spiral_matrix(3), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
//! assert_eq!(shuffle_char("012345", 1), "024135");
//! ```

pub mod config;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod matrix;
pub mod numerals;
pub mod permutation;
pub mod predicates;
pub mod report;
pub mod search;
pub mod shuffle;
pub mod sort;
pub mod types;

pub use config::{Config, OutputFormat};
pub use error::TaskError;
pub use matrix::{get_spiral_matrix, rotate_matrix};
pub use numerals::{convert_number_to_string, convert_to_roman_numerals, ROMAN_MAX};
pub use permutation::get_nearest_bigger;
pub use predicates::{can_queen_capture_king, get_max_number, is_isosceles_triangle, is_positive};
pub use report::Report;
pub use search::{get_balance_index, get_index_of, is_contain_number, is_palindrome};
pub use shuffle::{cycle_length, shuffle_char};
pub use sort::sort_by_asc;
pub use types::{Matrix, Position};
