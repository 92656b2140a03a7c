//! Command implementations for the task-deps CLI.

use crate::cli::{CliError, Commands, Verdict};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use task_deps::{TaskSnapshot, validate_no_cycle, validate_self_dependency};
use tracing::{debug, info, instrument};

/// Path value that selects stdin as the snapshot source.
pub const STDIN_PATH: &str = "-";

/// Execute a parsed command.
///
/// # Errors
///
/// Returns an error if the task snapshots cannot be loaded. A rejected
/// dependency edit is a [`Verdict`], not an error.
pub fn execute(command: &Commands) -> Result<Verdict, CliError> {
    match command {
        Commands::Check {
            tasks,
            task,
            depends,
        } => {
            let snapshots = load_snapshots(tasks)?;
            Ok(run_check(task, &normalize_depends(depends), &snapshots))
        }
        Commands::SelfCheck { task, depends } => {
            Ok(run_self_check(task, &normalize_depends(depends)))
        }
    }
}

/// Drop empty entries produced by a trailing or doubled comma.
fn normalize_depends(depends: &[String]) -> Vec<String> {
    depends.iter().filter(|dep| !dep.is_empty()).cloned().collect()
}

/// Run the full validation against loaded snapshots.
#[instrument(
    skip(depends, snapshots),
    fields(depends_count = depends.len(), snapshot_count = snapshots.len())
)]
pub fn run_check(task: &str, depends: &[String], snapshots: &[TaskSnapshot]) -> Verdict {
    let verdict = Verdict::from(validate_no_cycle(task, depends, snapshots));
    let accepted = verdict == Verdict::Accepted;
    info!(accepted, "Dependency check finished");
    verdict
}

/// Run only the self-dependency validation.
#[instrument(skip(depends), fields(depends_count = depends.len()))]
pub fn run_self_check(task: &str, depends: &[String]) -> Verdict {
    let verdict = Verdict::from(validate_self_dependency(task, depends));
    let accepted = verdict == Verdict::Accepted;
    info!(accepted, "Self-dependency check finished");
    verdict
}

/// Load task snapshots from a JSON file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be opened or does not hold a JSON
/// array of task snapshots.
pub fn load_snapshots(path: &Path) -> Result<Vec<TaskSnapshot>, CliError> {
    if path.as_os_str() == STDIN_PATH {
        return parse_snapshots(io::stdin().lock(), "stdin");
    }

    let file = File::open(path).map_err(|e| {
        CliError::input_with_help(
            format!("Failed to open {}: {e}", path.display()),
            "Check that the task snapshot file exists and is readable",
        )
    })?;
    parse_snapshots(BufReader::new(file), &path.display().to_string())
}

/// Parse a JSON array of task snapshots from a reader.
///
/// # Errors
///
/// Returns an error if the input is not a JSON array of task snapshots.
pub fn parse_snapshots(reader: impl Read, source: &str) -> Result<Vec<TaskSnapshot>, CliError> {
    let snapshots: Vec<TaskSnapshot> = serde_json::from_reader(reader).map_err(|e| {
        CliError::input_with_help(
            format!("Failed to parse {source}: {e}"),
            "Expected an array of {\"uuid\", \"depends\", \"status\"} objects",
        )
    })?;
    debug!("Loaded {} task snapshots from {}", snapshots.len(), source);
    Ok(snapshots)
}
