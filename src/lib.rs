//! A kanban board engine: named lists of nested tasks with undo/redo
//! history.
//!
//! The crate is a pure in-process state engine with no I/O of its own.
//! Collaborators such as a rendering layer or a drag-and-drop layer
//! construct [`model::Action`] values and feed them to
//! [`store::Store::dispatch`]; every structural edit produces a fresh board
//! snapshot on the undo history.

pub mod mocks;
pub mod model;
pub mod ops;
pub mod store;
