//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Indented text formatter
//! - `json` - JSON output

mod config;
mod json;
mod tree;

pub use config::OutputConfig;
pub use json::{print_json, to_json, write_json};
pub use tree::{INDENT_STEP, TreeFormatter, TreeLine, print_tree, tree_lines};
