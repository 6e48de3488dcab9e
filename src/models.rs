//! Frontend Models
//!
//! Task records as they live in memory and in the persisted JSON slot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier, stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never edited
    pub id: TaskId,
    /// Trimmed, non-empty text
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
    /// 1-based display rank, renumbered after every insertion or removal
    #[serde(default)]
    pub index: usize,
}

impl Task {
    /// Create a new incomplete task at the given rank
    pub fn new(id: TaskId, description: String, index: usize) -> Self {
        Self {
            id,
            description,
            completed: false,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId(7), "Learn Leptos".to_string(), 1);
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.description, "Learn Leptos");
        assert!(!task.completed);
        assert_eq!(task.index, 1);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(TaskId(1700000000000), "A".to_string(), 1);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"description":"A","completed":false,"index":1}"#);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let task: Task = serde_json::from_str(r#"{"id":3,"description":"B"}"#).unwrap();
        assert!(!task.completed);
        assert_eq!(task.index, 0);
    }
}
