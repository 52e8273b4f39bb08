//! Directory tree scanning
//!
//! `Scanner` walks a directory recursively and builds a `DirectoryNode`
//! holding every descendant directory and file. The whole tree is built in
//! memory before anything is rendered.

mod config;
mod node;
mod scanner;

pub use config::ScanConfig;
pub use node::DirectoryNode;
pub use scanner::{Scanner, scan};
