//! Command handlers.
//!
//! There is exactly one: [`read`], the read/convert/print cycle. It runs on
//! every invocation; the binary has no subcommands.

pub mod read;
