//! Error handling for the weighbridge CLI.
//!
//! The core has no failure modes — a reading either exists or the process
//! does not — so everything here is plumbing failure: configuration, logging
//! setup, or the write to stdout itself. Errors carry user-actionable
//! suggestions and map to stable exit codes.

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {message}")]
    LoggingInit { message: String },

    /// Writing the reading to stdout failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Error categories for exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],
            Self::LoggingInit { .. } => vec![
                "The tracing subscriber could not be installed".into(),
                "Check the RUST_LOG value if one is set".into(),
            ],
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get the error category for exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::LoggingInit { .. } | Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | Configuration |  4   |
    ///
    /// (Argument-parse failures exit 2 straight from clap in `main`.)
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        error!(category = ?self.category(), "{self}");
    }

    /// Format without ANSI codes, suggestions included.
    pub fn format_plain(&self) -> String {
        let mut out = format!("error: {self}\n");
        for s in self.suggestions() {
            out.push_str(&format!("  hint: {s}\n"));
        }
        out
    }

    /// Format with ANSI codes for a TTY.
    pub fn format_colored(&self) -> String {
        let mut out = format!("{} {self}\n", "error:".red().bold());
        for s in self.suggestions() {
            out.push_str(&format!("  {} {s}\n", "hint:".yellow()));
        }
        out
    }
}
