//! Output management and formatting.
//!
//! The reading is the program's product: it always goes to stdout and is
//! never suppressed by `--quiet`. Diagnostics belong to the tracing layer,
//! not here.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde_json::json;

use weighbridge_core::domain::Kilograms;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.format
        };

        Self {
            resolved_format,
            no_color: args.no_color || config.output.no_color,
        }
    }

    /// Write the converted reading to stdout in the resolved format.
    pub fn reading(&self, kilograms: Kilograms) -> io::Result<()> {
        let line = render_reading(kilograms, self.resolved_format, self.no_color);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Render one reading as a single output line.
///
/// Split out of [`OutputManager::reading`] so tests can check the exact text
/// without capturing stdout.
fn render_reading(kilograms: Kilograms, format: OutputFormat, no_color: bool) -> String {
    match format {
        // Auto was resolved in the constructor; treat a stray Auto as Plain.
        OutputFormat::Plain | OutputFormat::Auto => format!("{}", kilograms.value()),
        OutputFormat::Human => {
            if no_color {
                kilograms.to_string()
            } else {
                kilograms.to_string().cyan().bold().to_string()
            }
        }
        OutputFormat::Json => json!({ "kilograms": kilograms.value() }).to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
