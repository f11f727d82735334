use std::env;

/// Environment variable consulted first for the log filter.
pub const LOG_ENV: &str = "LOOPTASKS_LOG";

/// How the binary prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Runtime configuration for the `looptasks` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rendering used for every result.
    pub format: OutputFormat,
    /// `tracing-subscriber` filter directive, e.g. `looptasks=debug`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Combine command line flags with `LOOPTASKS_LOG`, falling back to
    /// `RUST_LOG` and then the default filter.
    pub fn from_args(json: bool) -> Self {
        let log_filter = env::var(LOG_ENV)
            .or_else(|_| env::var("RUST_LOG"))
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| Self::default().log_filter);
        Self {
            format: if json { OutputFormat::Json } else { OutputFormat::Plain },
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(Config::from_args(true).format, OutputFormat::Json);
        assert_eq!(Config::from_args(false).format, OutputFormat::Plain);
        assert_eq!(Config::default().log_filter, "warn");
    }
}
