//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums. No business logic lives here. There are no
//! subcommands: invoking the binary performs the one read/convert cycle.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "weighbridge",
    bin_name = "weighbridge",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{2696} Read the scale in pounds, report it in kilograms",
    long_about = "Weighbridge wraps a pound-denominated scale behind a metric \
                  adapter and prints the converted reading.",
    after_help = "EXAMPLES:\n\
        \x20 weighbridge                 # prints the reading in kilograms\n\
        \x20 weighbridge --format json   # machine-readable output\n\
        \x20 weighbridge -vv             # show conversion diagnostics"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── Global arguments ──────────────────────────────────────────────────────────

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors only
    -v      - Info level (progress messages)
    -vv     - Debug level (conversion diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all diagnostic output. The reading itself is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress diagnostic output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Per that convention any non-empty
    /// value counts as set, hence the falsey parser instead of clap's
    /// strict true/false one.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How to render the reading.
    #[arg(
        long = "format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Value with unit, colored.
    Human,
    /// Bare number.
    Plain,
    /// JSON object.
    Json,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_bare_invocation() {
        let cli = Cli::parse_from(["weighbridge"]);
        assert_eq!(cli.global.verbose, 0);
        assert!(!cli.global.quiet);
        assert_eq!(cli.global.format, OutputFormat::Auto);
    }

    #[test]
    fn parse_format_json() {
        let cli = Cli::parse_from(["weighbridge", "--format", "json"]);
        assert_eq!(cli.global.format, OutputFormat::Json);
    }

    #[test]
    fn verbose_counts_stack() {
        let cli = Cli::parse_from(["weighbridge", "-vvv"]);
        assert_eq!(cli.global.verbose, 3);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["weighbridge", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["weighbridge", "--units", "stone"]).is_err());
    }
}
