use crate::tracing::{LogLevel, TracingFormat};
use clap::{Parser, Subcommand, ValueEnum};
use miette::{Diagnostic, Report};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for an accepted dependency edit
pub const EXIT_OK: i32 = 0;
/// Exit code for a rejected dependency edit (self-dependency or cycle)
pub const EXIT_REJECTED: i32 = 1;
/// CLI, configuration or input error exit code
pub const EXIT_CLI: i32 = 2;

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// CLI or configuration error
    #[error("CLI/configuration error: {message}")]
    #[diagnostic(code(task_deps::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// The task snapshot input could not be read or parsed
    #[error("Invalid task snapshot input: {message}")]
    #[diagnostic(code(task_deps::cli::input))]
    Input {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Other unexpected error
    #[error("Unexpected error: {message}")]
    #[diagnostic(code(task_deps::cli::other))]
    Other {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new input error with help text
    #[must_use]
    pub fn input_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a new other error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            help: None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Input { .. } => "input",
            Self::Other { .. } => "other",
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(_err: &CliError) -> i32 {
    EXIT_CLI
}

/// Output format for command results
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain `ok` on success, a diagnostic on stderr otherwise
    #[default]
    Human,
    /// A single JSON object on stdout
    Json,
}

/// Validate task dependency edits before they are committed
#[derive(Parser, Debug)]
#[command(name = "task-deps")]
#[command(about = "Validate task dependency edits for self-references and cycles")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level.
    #[arg(
        short = 'L',
        long = "log-level",
        global = true,
        env = "TASK_DEPS_LOG_LEVEL",
        help = "Set logging level (RUST_LOG takes precedence)",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    /// Logging output format.
    #[arg(
        long = "log-format",
        global = true,
        env = "TASK_DEPS_LOG_FORMAT",
        default_value = "pretty",
        value_enum
    )]
    pub log_format: TracingFormat,

    /// Tracing filter directive, overriding both `RUST_LOG` and `--log-level`.
    #[arg(
        long = "log-filter",
        global = true,
        env = "TASK_DEPS_LOG_FILTER",
        value_name = "DIRECTIVE"
    )]
    pub log_filter: Option<String>,

    /// Result output format.
    #[arg(
        long,
        global = true,
        env = "TASK_DEPS_OUTPUT",
        default_value = "human",
        value_enum
    )]
    pub output: OutputFormat,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check a proposed dependency list against the existing tasks.
    #[command(about = "Reject self-dependencies and dependency cycles among pending tasks")]
    Check {
        /// JSON file holding an array of task snapshots, `-` for stdin.
        #[arg(long, env = "TASK_DEPS_TASKS", value_name = "PATH")]
        tasks: PathBuf,

        /// Identifier of the task being edited.
        #[arg(long, env = "TASK_DEPS_TASK", value_name = "ID")]
        task: String,

        /// Proposed dependency identifiers, comma separated.
        #[arg(long, env = "TASK_DEPS_DEPENDS", value_name = "ID,...", value_delimiter = ',')]
        depends: Vec<String>,
    },

    /// Check only for self-dependency.
    #[command(about = "Reject a dependency list that names the task itself")]
    SelfCheck {
        /// Identifier of the task being edited.
        #[arg(long, env = "TASK_DEPS_TASK", value_name = "ID")]
        task: String,

        /// Proposed dependency identifiers, comma separated.
        #[arg(long, env = "TASK_DEPS_DEPENDS", value_name = "ID,...", value_delimiter = ',')]
        depends: Vec<String>,
    },
}

/// Outcome of a validation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The edit keeps the dependency graph valid.
    Accepted,
    /// The edit was rejected.
    Rejected(task_deps::Error),
}

impl Verdict {
    /// Exit code reported for this verdict.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Accepted => EXIT_OK,
            Self::Rejected(_) => EXIT_REJECTED,
        }
    }
}

impl From<task_deps::Result<()>> for Verdict {
    fn from(result: task_deps::Result<()>) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(err) => Self::Rejected(err),
        }
    }
}

/// JSON body describing a verdict
#[derive(Debug, Serialize)]
struct VerdictEnvelope<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<&'a str>,
}

/// JSON body describing a CLI failure
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    code: &'static str,
    message: String,
}

/// Write a verdict in the requested format.
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn render_verdict(
    verdict: &Verdict,
    format: OutputFormat,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let envelope = match verdict {
                Verdict::Accepted => VerdictEnvelope {
                    valid: true,
                    kind: None,
                    message: None,
                    task: None,
                },
                Verdict::Rejected(err) => VerdictEnvelope {
                    valid: false,
                    kind: Some(err.kind()),
                    message: Some(err.to_string()),
                    task: match err {
                        task_deps::Error::SelfDependency { task } => Some(task.as_str()),
                        task_deps::Error::CircularDependency => None,
                    },
                },
            };
            serde_json::to_writer(&mut *stdout, &envelope)?;
            writeln!(stdout)
        }
        OutputFormat::Human => match verdict {
            Verdict::Accepted => writeln!(stdout, "ok"),
            Verdict::Rejected(err) => {
                writeln!(stderr, "{:?}", Report::new(err.clone()))?;
                stderr.flush()
            }
        },
    }
}

/// Write a CLI error in the requested format.
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn render_error(
    err: &CliError,
    format: OutputFormat,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let envelope = ErrorEnvelope {
                status: "error",
                code: err.error_code(),
                message: err.to_string(),
            };
            serde_json::to_writer(&mut *stdout, &envelope)?;
            writeln!(stdout)
        }
        OutputFormat::Human => {
            writeln!(stderr, "{:?}", Report::new(err.clone()))?;
            stderr.flush()
        }
    }
}
