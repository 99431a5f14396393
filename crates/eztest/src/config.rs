//! Runner configuration via environment variables
//!
//! A suite binary takes no arguments, so everything optional about a run is
//! read from the environment:
//! - `EZTEST_NO_COLOR=1` or `NO_COLOR=1`: plain verdict words
//! - `EZTEST_OUTPUT=/path/to/report.txt`: write the report to a file
//! - `EZTEST_LOG=debug`: log filter for the stderr tracing output

use std::env;
use std::path::PathBuf;

/// Default log filter when `EZTEST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Disable colored output (EZTEST_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Report file instead of stdout (EZTEST_OUTPUT=/path/to/file)
    pub output: Option<PathBuf>,
    /// Tracing filter directive (EZTEST_LOG, defaults to "warn")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("EZTEST_NO_COLOR").is_some() || env::var_os("NO_COLOR").is_some(),
            output: env::var_os("EZTEST_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_filter: env::var("EZTEST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Whether verdicts get colored on a sink that is (or is not) a terminal.
    /// Report files are never colored.
    pub fn use_color(&self, is_terminal: bool) -> bool {
        is_terminal && !self.no_color && self.output.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
