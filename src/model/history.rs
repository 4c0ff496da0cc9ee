use serde::{Deserialize, Serialize};

use super::list::Board;

/// The undo/redo envelope around the board: a past stack, the present, and a
/// future stack. Every entry is an independently owned snapshot — deriving a
/// new present never reaches into a board already stored here. Both stacks
/// push and pop at the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub past: Vec<Board>,
    pub present: Board,
    pub future: Vec<Board>,
}

impl History {
    /// Start a history at the given board with empty stacks
    pub fn new(present: Board) -> Self {
        History {
            past: Vec::new(),
            present,
            future: Vec::new(),
        }
    }

    /// Record a new present produced by a structural action. The old present
    /// moves onto the past stack and the future is invalidated — redo only
    /// survives an unbroken undo chain. The past keeps at most `limit`
    /// snapshots, dropping the oldest beyond it.
    pub fn record(&mut self, next: Board, limit: usize) {
        let prev = std::mem::replace(&mut self.present, next);
        self.past.push(prev);
        if self.past.len() > limit {
            self.past.drain(..self.past.len() - limit);
        }
        self.future.clear();
    }

    /// Step back one snapshot. Returns false, leaving everything unchanged,
    /// when there is no past.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.past.pop() else {
            return false;
        };
        let cur = std::mem::replace(&mut self.present, prev);
        self.future.push(cur);
        true
    }

    /// Step forward one snapshot. Returns false when there is no future.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let cur = std::mem::replace(&mut self.present, next);
        self.past.push(cur);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::List;

    fn board(name: &str) -> Board {
        vec![List {
            id: "list-1".into(),
            name: name.into(),
            uncompleted_tasks: Vec::new(),
            completed_tasks: Vec::new(),
        }]
    }

    #[test]
    fn test_record_pushes_past_and_clears_future() {
        let mut history = History::new(board("a"));
        history.record(board("b"), 500);
        assert!(history.undo());
        assert_eq!(history.future.len(), 1);

        history.record(board("c"), 500);
        assert_eq!(history.present, board("c"));
        assert_eq!(history.past.len(), 1);
        assert!(history.future.is_empty());
    }

    #[test]
    fn test_undo_redo_shift_between_stacks() {
        let mut history = History::new(board("a"));
        history.record(board("b"), 500);

        assert!(history.undo());
        assert_eq!(history.present, board("a"));
        assert_eq!(history.past.len(), 0);
        assert_eq!(history.future.len(), 1);

        assert!(history.redo());
        assert_eq!(history.present, board("b"));
        assert_eq!(history.past.len(), 1);
        assert_eq!(history.future.len(), 0);
    }

    #[test]
    fn test_undo_empty_past_is_noop() {
        let mut history = History::new(board("a"));
        assert!(!history.undo());
        assert_eq!(history.present, board("a"));
        assert!(history.future.is_empty());
    }

    #[test]
    fn test_redo_empty_future_is_noop() {
        let mut history = History::new(board("a"));
        assert!(!history.redo());
        assert_eq!(history.present, board("a"));
        assert!(history.past.is_empty());
    }

    #[test]
    fn test_past_cap_drops_oldest() {
        let mut history = History::new(board("0"));
        for i in 1..=5 {
            history.record(board(&i.to_string()), 3);
        }
        assert_eq!(history.past.len(), 3);
        // Oldest snapshots evicted first
        assert_eq!(history.past[0], board("2"));
        assert_eq!(history.present, board("5"));
    }
}
