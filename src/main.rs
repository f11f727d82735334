use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use looptasks::{
    can_queen_capture_king, convert_number_to_string, convert_to_roman_numerals,
    get_balance_index, get_index_of, get_max_number, get_nearest_bigger, get_spiral_matrix,
    io_utils::{io_cli_error, simple_cli_error, task_cli_error, CliError},
    is_contain_number, is_isosceles_triangle, is_palindrome, is_positive, logging, rotate_matrix,
    shuffle_char, sort_by_asc, Config, Matrix, Position, Report, TaskError,
};

/// Run one of the looptasks exercises from the command line.
#[derive(Parser)]
#[command(name = "looptasks", version)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Is N zero or greater
    Positive {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },
    /// Greatest of three numbers
    Max {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Can a queen at (QX, QY) capture a king at (KX, KY)
    Queen {
        #[arg(allow_negative_numbers = true)]
        qx: i32,
        #[arg(allow_negative_numbers = true)]
        qy: i32,
        #[arg(allow_negative_numbers = true)]
        kx: i32,
        #[arg(allow_negative_numbers = true)]
        ky: i32,
    },
    /// Do the three sides form an isosceles triangle
    Isosceles {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        #[arg(allow_negative_numbers = true)]
        c: i64,
    },
    /// Roman numeral for 1..=39
    Roman { n: u32 },
    /// Spell out every character of a number
    Words {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Is the text a palindrome
    Palindrome { text: String },
    /// First position of CH in TEXT, -1 if absent
    IndexOf { text: String, ch: char },
    /// Does N contain DIGIT
    Contains {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        digit: u8,
    },
    /// Index where the left and right sums match, -1 if none
    Balance {
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        values: Vec<i64>,
    },
    /// Clockwise spiral matrix of SIZE x SIZE
    Spiral { size: usize },
    /// Rotate a square matrix 90 degrees clockwise
    Rotate {
        /// JSON file holding the matrix
        #[arg(long)]
        input: Option<PathBuf>,
        /// Matrix as inline JSON, e.g. '[[1,2],[3,4]]'
        #[arg(long)]
        matrix: Option<String>,
    },
    /// Sort numbers ascending
    Sort {
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        values: Vec<f64>,
    },
    /// Interleave even and odd characters ITERATIONS times
    Shuffle { text: String, iterations: u64 },
    /// Next larger number with the same digits
    NearestBigger { n: u64 },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_args(cli.json);
    logging::init(&config.log_filter);

    let report = execute(cli.command)?;
    let rendered = report
        .render(config.format)
        .map_err(|e| task_cli_error("rendering result", e))?;
    println!("{rendered}");
    Ok(())
}

fn execute(command: Command) -> Result<Report, CliError> {
    let report = match command {
        Command::Positive { n } => Report::Flag(is_positive(n)),
        Command::Max { a, b, c } => Report::Real(get_max_number(a, b, c)),
        Command::Queen { qx, qy, kx, ky } => Report::Flag(can_queen_capture_king(
            Position::new(qx, qy),
            Position::new(kx, ky),
        )),
        Command::Isosceles { a, b, c } => Report::Flag(is_isosceles_triangle(a, b, c)),
        Command::Roman { n } => Report::Text(
            convert_to_roman_numerals(n).map_err(|e| task_cli_error("roman", e))?,
        ),
        Command::Words { number } => Report::Text(convert_number_to_string(&number)),
        Command::Palindrome { text } => Report::Flag(is_palindrome(&text)),
        Command::IndexOf { text, ch } => Report::index(get_index_of(&text, ch)),
        Command::Contains { n, digit } => {
            if digit > 9 {
                let err = TaskError::Parse(format!("digit {digit} is not a single decimal digit"));
                return Err(task_cli_error("contains", err));
            }
            Report::Flag(is_contain_number(n, digit))
        }
        Command::Balance { values } => Report::index(get_balance_index(&values)),
        Command::Spiral { size } => Report::Spiral(get_spiral_matrix(size)),
        Command::Rotate { input, matrix } => {
            let mut grid = load_matrix(input, matrix)?;
            info!(rows = grid.len(), "rotating matrix");
            rotate_matrix(&mut grid).map_err(|e| task_cli_error("rotate", e))?;
            Report::Grid(grid)
        }
        Command::Sort { mut values } => {
            sort_by_asc(&mut values);
            Report::Reals(values)
        }
        Command::Shuffle { text, iterations } => Report::Text(shuffle_char(&text, iterations)),
        Command::NearestBigger { n } => Report::Unsigned(
            get_nearest_bigger(n).map_err(|e| task_cli_error("nearest-bigger", e))?,
        ),
    };
    Ok(report)
}

fn load_matrix(input: Option<PathBuf>, inline: Option<String>) -> Result<Matrix, CliError> {
    let text = match (input, inline) {
        (Some(path), None) => {
            fs::read_to_string(&path).map_err(|e| io_cli_error("reading matrix file", &path, e))?
        }
        (None, Some(text)) => text,
        _ => return Err(simple_cli_error("pass exactly one of --input or --matrix")),
    };
    serde_json::from_str(&text).map_err(|e| task_cli_error("parsing matrix", TaskError::from(e)))
}
