//! JSON output formatting

use std::io::{self, Write};

use crate::tree::DirectoryNode;

/// Serialize the tree as pretty-printed JSON.
pub fn to_json(node: &DirectoryNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Write the tree as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(node: &DirectoryNode, out: &mut W) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &DirectoryNode) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_json(node, &mut stdout)?;
    stdout.flush()
}
