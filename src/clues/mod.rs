pub mod tree;

pub use tree::ClueTree;
