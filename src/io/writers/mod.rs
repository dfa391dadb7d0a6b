pub mod markdown;

pub use markdown::{Block, Node};
