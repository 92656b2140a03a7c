//! Error types for dependency validation.

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for dependency validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a proposed dependency edit is rejected.
///
/// Both variants are deterministic: validating the same inputs again always
/// yields the same error, so retrying is pointless.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// The proposed dependency list names the task itself.
    #[error("task cannot depend on itself: {task}")]
    #[diagnostic(
        code(task_deps::self_dependency),
        help("Remove '{task}' from its own dependency list")
    )]
    SelfDependency {
        /// The offending task identifier.
        task: String,
    },

    /// Committing the proposed dependencies would close a cycle among pending tasks.
    ///
    /// No cycle members are reported.
    #[error("circular dependency detected: adding these dependencies would create a cycle")]
    #[diagnostic(
        code(task_deps::circular_dependency),
        help("Drop the dependency that leads back to this task")
    )]
    CircularDependency,
}

impl Error {
    /// Create a self-dependency error for the given task.
    #[must_use]
    pub fn self_dependency(task: impl Into<String>) -> Self {
        Self::SelfDependency { task: task.into() }
    }

    /// Stable snake_case identifier of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelfDependency { .. } => "self_dependency",
            Self::CircularDependency => "circular_dependency",
        }
    }
}
