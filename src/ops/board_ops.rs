use crate::model::action::{Action, Inserted};
use crate::model::list::{Board, List};
use crate::model::task::Task;
use crate::ops::tree_ops::{self, TreeError};

/// Error type for board transitions. Every variant signals a bug in the
/// dispatching collaborator, not recoverable user input, and propagates to
/// that collaborator uncaught.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("list not found: {0}")]
    ListNotFound(String),
    #[error("task not found in uncompleted tasks: {0}")]
    TaskNotFound(String),
    #[error("cannot move task {task_id} under {parent_id} inside its own subtree")]
    MoveIntoOwnSubtree { task_id: String, parent_id: String },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// The outcome of a board transition: the new board, plus the entity created
/// by an insert action so the caller can chain follow-up effects.
#[derive(Debug)]
pub struct Applied {
    pub board: Board,
    pub inserted: Option<Inserted>,
}

/// Pure board transition `(board, action) -> board'`. The input board is
/// never mutated; the result is a freshly owned value, safe to stack on the
/// undo history next to the input. Soft misses (absent IDs where deletion or
/// renaming is requested, out-of-range move indices) resolve to a no-op.
pub fn apply(board: &Board, action: Action) -> Result<Applied, BoardError> {
    let mut lists = board.clone();
    let mut inserted = None;

    match action {
        // The history reducer intercepts these; at this layer they leave the
        // board untouched.
        Action::Undo | Action::Redo => {}

        Action::ListCleared { list_id } => {
            if let Some(list) = find_list_mut(&mut lists, &list_id) {
                list.completed_tasks.clear();
            }
        }

        Action::ListDeleted { list_id } => {
            lists.retain(|list| list.id != list_id);
        }

        Action::ListInserted => {
            let list = List::new();
            inserted = Some(Inserted::List(list.clone()));
            lists.push(list);
        }

        Action::ListMoved {
            start_index,
            end_index,
        } => {
            // Out-of-range indices resolve to a no-op
            if start_index < lists.len() && end_index < lists.len() {
                let list = lists.remove(start_index);
                lists.insert(end_index, list);
            }
        }

        Action::ListRenamed { list_id, name } => {
            if let Some(list) = find_list_mut(&mut lists, &list_id) {
                list.name = name;
            }
        }

        Action::TaskDeleted { list_id, task_id } => {
            if let Some(list) = find_list_mut(&mut lists, &list_id)
                && tree_ops::detach_task(&mut list.uncompleted_tasks, &task_id).is_none()
            {
                tree_ops::detach_task(&mut list.completed_tasks, &task_id);
            }
        }

        Action::TaskInserted {
            list_id,
            parent_id,
            previous_id,
        } => {
            let list =
                find_list_mut(&mut lists, &list_id).ok_or(BoardError::ListNotFound(list_id))?;
            let task = Task::new();
            inserted = Some(Inserted::Task(task.clone()));
            tree_ops::insert_at(
                &mut list.uncompleted_tasks,
                task,
                parent_id.as_deref(),
                previous_id.as_deref(),
            )?;
        }

        Action::TaskMoved {
            list_id,
            task_id,
            parent_id,
            previous_id,
            destination_list_id,
        } => {
            let source = find_list_mut(&mut lists, &list_id)
                .ok_or_else(|| BoardError::ListNotFound(list_id.clone()))?;
            // Completed tasks are not draggable; only the uncompleted forest
            // is searched.
            let task = tree_ops::detach_task(&mut source.uncompleted_tasks, &task_id)
                .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;

            // Reparenting under the moved subtree (or under the task itself)
            // would orphan it. The drag layer rules this out before
            // dispatching; the reducer re-checks and fails fast.
            if let Some(pid) = parent_id.as_deref()
                && tree_ops::find_task(std::slice::from_ref(&task), pid).is_some()
            {
                return Err(BoardError::MoveIntoOwnSubtree {
                    task_id,
                    parent_id: pid.to_string(),
                });
            }

            let destination_id = destination_list_id.unwrap_or(list_id);
            let destination = find_list_mut(&mut lists, &destination_id)
                .ok_or(BoardError::ListNotFound(destination_id))?;
            tree_ops::insert_at(
                &mut destination.uncompleted_tasks,
                task,
                parent_id.as_deref(),
                previous_id.as_deref(),
            )?;
        }

        Action::TaskRenamed {
            list_id,
            task_id,
            text,
        } => {
            if let Some(list) = find_list_mut(&mut lists, &list_id) {
                let found = tree_ops::find_task_mut(&mut list.uncompleted_tasks, &task_id)
                    .or_else(|| tree_ops::find_task_mut(&mut list.completed_tasks, &task_id));
                if let Some(task) = found {
                    task.text = text;
                }
            }
        }

        Action::TaskToggled { list_id, task_id } => {
            if let Some(list) = find_list_mut(&mut lists, &list_id) {
                if let Some(task) = tree_ops::detach_task(&mut list.uncompleted_tasks, &task_id) {
                    // Completing flattens the whole subtree into the
                    // completed run, front-to-back in pre-order. The
                    // hierarchy is gone for good; undo restores the prior
                    // snapshot wholesale.
                    let flat = tree_ops::flatten_subtree(task);
                    list.completed_tasks.splice(0..0, flat);
                } else if let Some(task) =
                    tree_ops::detach_task(&mut list.completed_tasks, &task_id)
                {
                    // Completed entries are flat already; the task re-enters
                    // the forest as a childless top-level sibling.
                    list.uncompleted_tasks.insert(0, task);
                }
            }
        }
    }

    Ok(Applied { board: lists, inserted })
}

fn find_list_mut<'a>(lists: &'a mut Board, list_id: &str) -> Option<&'a mut List> {
    lists.iter_mut().find(|list| list.id == list_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
