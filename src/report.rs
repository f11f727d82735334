//! Result values printed by the binary.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::types::Matrix;
use crate::TaskError;

/// Outcome of one operation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Flag(bool),
    Real(f64),
    Integer(i64),
    Unsigned(u64),
    Text(String),
    Reals(Vec<f64>),
    Grid(Matrix<i64>),
    Spiral(Matrix<u64>),
}

impl Report {
    /// Position result using `-1` for "not found".
    pub fn index(found: Option<usize>) -> Self {
        match found {
            Some(i) => Report::Unsigned(i as u64),
            None => Report::Integer(-1),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, TaskError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Plain => Ok(self.plain()),
        }
    }

    fn plain(&self) -> String {
        match self {
            Report::Flag(b) => b.to_string(),
            Report::Real(v) => v.to_string(),
            Report::Integer(v) => v.to_string(),
            Report::Unsigned(v) => v.to_string(),
            Report::Text(s) => s.clone(),
            Report::Reals(values) => join(values),
            Report::Grid(rows) => rows.iter().map(|r| join(r)).collect::<Vec<_>>().join("\n"),
            Report::Spiral(rows) => rows.iter().map(|r| join(r)).collect::<Vec<_>>().join("\n"),
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
