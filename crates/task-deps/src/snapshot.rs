//! Read-only task snapshots supplied by the storage layer.

use crate::{PENDING_STATUS, TaskDependencyData};
use serde::{Deserialize, Serialize};

/// Minimal view of a stored task used for dependency validation.
///
/// The JSON shape is `{"uuid": "...", "depends": ["..."], "status": "..."}`.
/// A missing or `null` `depends` field deserializes as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Unique task identifier.
    pub uuid: String,
    /// Identifiers of the tasks this task depends on, in stored order.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub depends: Vec<String>,
    /// Task status, e.g. `"pending"` or `"completed"`.
    pub status: String,
}

/// Treat a `null` value as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl TaskSnapshot {
    /// Create a snapshot from its parts.
    #[must_use]
    pub fn new(
        uuid: impl Into<String>,
        depends: impl IntoIterator<Item = impl Into<String>>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            depends: depends.into_iter().map(Into::into).collect(),
            status: status.into(),
        }
    }

    /// Create a snapshot with the pending status.
    #[must_use]
    pub fn pending(
        uuid: impl Into<String>,
        depends: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(uuid, depends, PENDING_STATUS)
    }
}

impl TaskDependencyData for TaskSnapshot {
    fn task_id(&self) -> &str {
        &self.uuid
    }

    fn dependency_ids(&self) -> impl Iterator<Item = &str> {
        self.depends.iter().map(String::as_str)
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_constructor() {
        let task = TaskSnapshot::pending("a", ["b", "c"]);
        assert!(task.is_pending());
        assert_eq!(task.dependency_ids().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_status_match_is_exact() {
        assert!(!TaskSnapshot::new("a", Vec::<String>::new(), "Pending").is_pending());
        assert!(!TaskSnapshot::new("a", Vec::<String>::new(), " pending").is_pending());
        assert!(!TaskSnapshot::new("a", Vec::<String>::new(), "completed").is_pending());
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"[
            {"uuid": "a", "depends": ["b"], "status": "pending"},
            {"uuid": "b", "status": "completed"},
            {"uuid": "c", "depends": null, "status": "pending"}
        ]"#;
        let tasks: Vec<TaskSnapshot> = serde_json::from_str(json).unwrap();

        assert_eq!(tasks[0], TaskSnapshot::pending("a", ["b"]));
        assert!(tasks[1].depends.is_empty());
        assert_eq!(tasks[1].status(), "completed");
        assert_eq!(tasks[2], TaskSnapshot::pending("c", Vec::<String>::new()));
    }

    #[test]
    fn test_null_depends_is_empty() {
        let task: TaskSnapshot =
            serde_json::from_str(r#"{"uuid": "a", "depends": null, "status": "pending"}"#).unwrap();
        assert!(task.depends.is_empty());
        assert_eq!(task.dependency_ids().count(), 0);
    }
}
