//! foldertree - print a directory and everything beneath it as an indented tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ScanError, ScanResult};
pub use output::{OutputConfig, TreeFormatter, print_json, print_tree, to_json};
pub use tree::{DirectoryNode, ScanConfig, Scanner, scan};
