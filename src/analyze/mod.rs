pub mod node_model;
pub mod selector;
pub mod uniqueness;
pub mod walker;
