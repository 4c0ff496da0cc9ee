use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task: one node in a list's task forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Globally unique ID, assigned once at insertion time
    pub id: String,
    /// Task text
    pub text: String,
    /// Subtasks (recursive, ordered)
    pub children: Vec<Task>,
}

impl Task {
    /// Create an empty task with a fresh globally-unique ID
    pub fn new() -> Self {
        Task {
            id: Uuid::now_v7().to_string(),
            text: String::new(),
            children: Vec::new(),
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_ids_are_unique() {
        let a = Task::new();
        let b = Task::new();
        assert_ne!(a.id, b.id);
        assert!(a.text.is_empty());
        assert!(a.children.is_empty());
    }
}
