pub mod tree_ops;
pub mod board_ops;
