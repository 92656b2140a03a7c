//! Validation entry points for proposed dependency edits.

use crate::{DependencyGraph, Error, Result, TaskDependencyData};
use tracing::debug;

/// Reject a dependency list that names the task itself.
///
/// An empty list is always valid. Duplicate entries do not hide a
/// self-reference.
///
/// # Errors
///
/// Returns [`Error::SelfDependency`] if `dependencies` contains `task_id`.
pub fn validate_self_dependency(task_id: &str, dependencies: &[String]) -> Result<()> {
    if let Some(dep) = dependencies.iter().find(|dep| *dep == task_id) {
        debug!("Task '{}' lists itself as a dependency", task_id);
        return Err(Error::self_dependency(dep.as_str()));
    }
    Ok(())
}

/// Validate that giving `task_id` the dependency list `dependencies` keeps
/// the pending task graph free of cycles reachable from `task_id`.
///
/// Runs [`validate_self_dependency`] first. An empty list succeeds without
/// building a graph. Tasks in `existing` that are not pending are left out
/// of the graph, so a cycle through them goes unnoticed.
///
/// # Errors
///
/// Returns [`Error::SelfDependency`] if the list names the task itself, or
/// [`Error::CircularDependency`] if the edit would create a cycle.
pub fn validate_no_cycle<T: TaskDependencyData>(
    task_id: &str,
    dependencies: &[String],
    existing: &[T],
) -> Result<()> {
    if dependencies.is_empty() {
        return Ok(());
    }

    validate_self_dependency(task_id, dependencies)?;

    let graph = DependencyGraph::build(task_id, dependencies, existing);
    if graph.has_cycle_from(task_id) {
        debug!("Rejecting dependencies of '{}': cycle detected", task_id);
        return Err(Error::CircularDependency);
    }

    debug!("Dependencies of '{}' are acyclic", task_id);
    Ok(())
}
