//! Input reading from files and stdin.

mod reader;

pub use reader::{InputReader, split_lines};
