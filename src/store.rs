use tracing::debug;

use crate::model::action::{Action, Inserted};
use crate::model::history::History;
use crate::model::list::Board;
use crate::ops::board_ops::{self, BoardError};

const HISTORY_LIMIT: usize = 500;

/// Owns the single history value and is the only mutation path into it.
/// Collaborators hold the store by reference (the UI event loop, a test
/// harness) — there is no ambient global.
///
/// Dispatch is synchronous and runs to completion: one action is fully
/// applied and recorded before the next is looked at, so there is never a
/// partial transition to observe and no locking anywhere.
pub struct Store {
    history: History,
    limit: usize,
}

impl Store {
    /// Create a store seeded with an initial board
    pub fn new(board: Board) -> Self {
        Store {
            history: History::new(board),
            limit: HISTORY_LIMIT,
        }
    }

    /// Create a store with a custom cap on the past stack
    pub fn with_limit(board: Board, limit: usize) -> Self {
        Store {
            history: History::new(board),
            limit,
        }
    }

    /// The current history snapshot
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The present board
    pub fn board(&self) -> &Board {
        &self.history.present
    }

    /// Apply one action. Undo/redo shift snapshots between the history
    /// stacks without running the board reducer; every other action runs it
    /// against the present, records the result, and invalidates the future.
    /// Insert actions hand the created entity back to the caller.
    ///
    /// A reducer error means a collaborator dispatched against a stale or
    /// invalid ID; the history is left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Inserted>, BoardError> {
        debug!(?action, "dispatch");

        match action {
            Action::Undo => {
                self.history.undo();
                Ok(None)
            }
            Action::Redo => {
                self.history.redo();
                Ok(None)
            }
            action => {
                let applied = board_ops::apply(&self.history.present, action)?;
                self.history.record(applied.board, self.limit);
                Ok(applied.inserted)
            }
        }
    }
}
