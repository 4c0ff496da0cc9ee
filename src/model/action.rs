use serde::{Deserialize, Serialize};

use super::list::List;
use super::task::Task;

/// The dispatch vocabulary. Serde-tagged with the wire names the rendering,
/// drag-and-drop, and AI collaborators speak (`"list/moved"`, `"task/moved"`,
/// …); the vocabulary is closed, so a payload with an unknown tag fails at
/// the deserialization boundary and never reaches the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    /// Step the board back one snapshot
    #[serde(rename = "board/undo")]
    Undo,
    /// Step the board forward one snapshot
    #[serde(rename = "board/redo")]
    Redo,
    /// Empty a list's completed tasks
    #[serde(rename = "list/cleared")]
    ListCleared { list_id: String },
    /// Remove a list and all its tasks
    #[serde(rename = "list/deleted")]
    ListDeleted { list_id: String },
    /// Append a new empty list at the end of the board
    #[serde(rename = "list/inserted")]
    ListInserted,
    /// Remove the list at `start_index`, reinsert it at `end_index`
    #[serde(rename = "list/moved")]
    ListMoved { start_index: usize, end_index: usize },
    /// Set a list's name
    #[serde(rename = "list/renamed")]
    ListRenamed { list_id: String, name: String },
    /// Detach and discard a task and its subtree
    #[serde(rename = "task/deleted")]
    TaskDeleted { list_id: String, task_id: String },
    /// Insert a new empty task into a list's uncompleted forest
    #[serde(rename = "task/inserted")]
    TaskInserted {
        list_id: String,
        /// Insert into this task's children instead of the forest top level
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_id: Option<String>,
        /// Insert immediately after this sibling; unknown or absent lands
        /// the task at index 0
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_id: Option<String>,
    },
    /// Move a task (with its subtree) to a new parent/position, possibly in
    /// another list
    #[serde(rename = "task/moved")]
    TaskMoved {
        list_id: String,
        task_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_id: Option<String>,
        /// Defaults to the source list
        #[serde(skip_serializing_if = "Option::is_none")]
        destination_list_id: Option<String>,
    },
    /// Set a task's text
    #[serde(rename = "task/renamed")]
    TaskRenamed {
        list_id: String,
        task_id: String,
        text: String,
    },
    /// Flip a task between the uncompleted forest and the completed run
    #[serde(rename = "task/toggled")]
    TaskToggled { list_id: String, task_id: String },
}

/// The entity created by an insert action, returned synchronously from
/// dispatch so the caller can chain follow-up effects (focus a rename input,
/// attach AI-generated subtasks) without a second round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted {
    List(List),
    Task(Task),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip() {
        let action = Action::TaskMoved {
            list_id: "list-1".into(),
            task_id: "task-1".into(),
            parent_id: None,
            previous_id: None,
            destination_list_id: Some("list-2".into()),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "task/moved");
        assert_eq!(json["listId"], "list-1");
        assert_eq!(json["destinationListId"], "list-2");
        // Absent optionals stay off the wire
        assert!(json.get("parentId").is_none());

        let parsed: Action = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let parsed: Action =
            serde_json::from_str(r#"{"type":"task/inserted","listId":"list-1"}"#).unwrap();
        assert_eq!(
            parsed,
            Action::TaskInserted {
                list_id: "list-1".into(),
                parent_id: None,
                previous_id: None,
            }
        );
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result = serde_json::from_str::<Action>(r#"{"type":"unknown/action"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_undo_redo_tags() {
        let undo: Action = serde_json::from_str(r#"{"type":"board/undo"}"#).unwrap();
        assert_eq!(undo, Action::Undo);
        let redo: Action = serde_json::from_str(r#"{"type":"board/redo"}"#).unwrap();
        assert_eq!(redo, Action::Redo);
    }
}
