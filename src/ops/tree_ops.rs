use crate::model::task::Task;

/// Error type for tree operations
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("parent task not found: {0}")]
    ParentNotFound(String),
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Find a task by ID anywhere in a forest. Depth-first pre-order, first
/// match.
pub fn find_task<'a>(forest: &'a [Task], task_id: &str) -> Option<&'a Task> {
    for task in forest {
        if task.id == task_id {
            return Some(task);
        }
        if let Some(t) = find_task(&task.children, task_id) {
            return Some(t);
        }
    }
    None
}

/// Find a task by ID anywhere in a forest, returning a mutable ref.
pub fn find_task_mut<'a>(forest: &'a mut [Task], task_id: &str) -> Option<&'a mut Task> {
    for task in forest.iter_mut() {
        if task.id == task_id {
            return Some(task);
        }
        if let Some(t) = find_task_mut(&mut task.children, task_id) {
            return Some(t);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Detach / flatten
// ---------------------------------------------------------------------------

/// Remove the task with the given ID from wherever in the forest it lives
/// and return it with its subtree intact. Same search order as [`find_task`];
/// the forest never keeps a dangling copy.
pub fn detach_task(forest: &mut Vec<Task>, task_id: &str) -> Option<Task> {
    for i in 0..forest.len() {
        if forest[i].id == task_id {
            return Some(forest.remove(i));
        }
        if let Some(t) = detach_task(&mut forest[i].children, task_id) {
            return Some(t);
        }
    }
    None
}

/// Collapse a subtree into a flat run: the task itself stripped of children,
/// then every descendant as a standalone childless node, in pre-order. The
/// hierarchy is discarded permanently.
pub fn flatten_subtree(task: Task) -> Vec<Task> {
    let Task { id, text, children } = task;
    let mut flat = vec![Task {
        id,
        text,
        children: Vec::new(),
    }];
    for child in children {
        flat.extend(flatten_subtree(child));
    }
    flat
}

/// Total node count strictly below the task. Drag-preview badge data, not a
/// structural invariant.
pub fn count_descendants(task: &Task) -> usize {
    task.children
        .iter()
        .map(|child| 1 + count_descendants(child))
        .sum()
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

/// Insert a task into a forest. With `parent_id` the target sibling sequence
/// is that parent's children (a missing parent is an error); without it, the
/// forest top level. Within the target sequence the task lands immediately
/// after `previous_id`, or at index 0 when `previous_id` is absent or names
/// no sibling there.
pub fn insert_at(
    forest: &mut Vec<Task>,
    task: Task,
    parent_id: Option<&str>,
    previous_id: Option<&str>,
) -> Result<(), TreeError> {
    let siblings = match parent_id {
        Some(pid) => {
            let parent = find_task_mut(forest, pid)
                .ok_or_else(|| TreeError::ParentNotFound(pid.to_string()))?;
            &mut parent.children
        }
        None => forest,
    };

    let index = previous_id
        .and_then(|pid| siblings.iter().position(|t| t.id == pid))
        .map_or(0, |i| i + 1);
    siblings.insert(index, task);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
