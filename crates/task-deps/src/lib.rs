//! Dependency edit validation for task management.
//!
//! This crate decides whether giving a task a new dependency list would make
//! it depend on itself or close a circular dependency chain among pending
//! tasks. Every call builds a throwaway graph from the caller's snapshot, so
//! nothing is cached and concurrent calls need no locking.
//!
//! # Key Types
//!
//! - [`validate_self_dependency`]: Rejects a dependency list naming the task itself
//! - [`validate_no_cycle`]: Full check, self-dependency first, then cycle detection
//! - [`TaskDependencyData`]: Trait that stored task types implement to be validated
//! - [`DependencyGraph`]: The per-call graph of pending tasks plus the proposed edit
//!
//! # Example
//!
//! ```
//! use task_deps::{Error, TaskSnapshot, validate_no_cycle};
//!
//! let existing = vec![
//!     TaskSnapshot::pending("a", ["b"]),
//!     TaskSnapshot::pending("b", ["c"]),
//! ];
//!
//! // c -> a would close c -> a -> b -> c
//! let proposed = vec!["a".to_string()];
//! assert_eq!(
//!     validate_no_cycle("c", &proposed, &existing),
//!     Err(Error::CircularDependency)
//! );
//!
//! // A new task may depend on a
//! assert!(validate_no_cycle("d", &proposed, &existing).is_ok());
//! ```
//!
//! Only tasks whose status is exactly `"pending"` take part in the graph. A
//! cycle that passes through a completed task is not reported.

mod error;
mod graph;
mod snapshot;
mod validation;

pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use snapshot::TaskSnapshot;
pub use validation::{validate_no_cycle, validate_self_dependency};

/// Status value of tasks that participate in cycle detection.
pub const PENDING_STATUS: &str = "pending";

/// Trait for stored task data that can be checked for dependency cycles.
///
/// Implement this trait for your task type to pass it to
/// [`validate_no_cycle`] without converting to [`TaskSnapshot`].
pub trait TaskDependencyData {
    /// Returns the unique identifier of this task.
    fn task_id(&self) -> &str;

    /// Returns the identifiers of the tasks this task depends on, in stored order.
    fn dependency_ids(&self) -> impl Iterator<Item = &str>;

    /// Returns the task status.
    fn status(&self) -> &str;

    /// Whether this task participates in cycle detection.
    ///
    /// The comparison against [`PENDING_STATUS`] is byte-exact.
    fn is_pending(&self) -> bool {
        self.status() == PENDING_STATUS
    }
}
