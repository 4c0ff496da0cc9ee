use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;

/// An ordered board of lists. List IDs are unique within a board.
pub type Board = Vec<List>;

/// A named list holding two task collections: an ordered forest of
/// uncompleted tasks and a flat ordered run of completed ones. A task ID
/// lives in exactly one list, in exactly one collection, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    /// Top-level siblings, each possibly with nested children
    pub uncompleted_tasks: Vec<Task>,
    /// Never nested — completed entries keep no children
    pub completed_tasks: Vec<Task>,
}

impl List {
    /// Create an empty unnamed list with a fresh globally-unique ID
    pub fn new() -> Self {
        List {
            id: Uuid::now_v7().to_string(),
            name: String::new(),
            uncompleted_tasks: Vec::new(),
            completed_tasks: Vec::new(),
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}
