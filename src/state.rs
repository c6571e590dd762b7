mod error;
mod tree;


pub use error::{Result, StateError};
pub use tree::{DELIMITER, StateTree, lookup};
