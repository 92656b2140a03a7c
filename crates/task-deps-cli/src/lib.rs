//! Command-line front end for task dependency validation.
//!
//! Reads existing task snapshots from a JSON file (or stdin), runs the
//! checks from [`task_deps`] for one proposed edit, and reports the verdict
//! as text or JSON with a matching exit code.

/// Argument parsing, errors, exit codes and output rendering.
pub mod cli;
/// Command implementations.
pub mod commands;
/// Tracing subscriber setup.
pub mod tracing;

pub use cli::{Cli, CliError, Commands, OutputFormat, Verdict};
