//! The scanned directory structure

use std::collections::BTreeMap;

use serde::Serialize;

/// One directory level of a scanned tree.
///
/// A node exclusively owns its subdirectories, so a tree has no shared
/// nodes and no parent links. Subdirectories iterate in name order and the
/// scanner stores file names sorted, which keeps rendering reproducible
/// regardless of the order the filesystem lists entries in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    name: String,
    subdirectories: BTreeMap<String, DirectoryNode>,
    files: Vec<String>,
}

impl DirectoryNode {
    /// Build a node. File names are sorted here so every node upholds the
    /// same ordering no matter who constructs it.
    pub fn new(
        name: impl Into<String>,
        subdirectories: BTreeMap<String, DirectoryNode>,
        mut files: Vec<String>,
    ) -> Self {
        files.sort();
        Self {
            name: name.into(),
            subdirectories,
            files,
        }
    }

    /// A node with no children, e.g. for an empty directory.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, BTreeMap::new(), Vec::new())
    }

    /// Add a subdirectory, keyed by its name. Used to assemble trees by hand.
    pub fn with_subdirectory(mut self, child: DirectoryNode) -> Self {
        self.subdirectories.insert(child.name.clone(), child);
        self
    }

    /// Add a file name, keeping the file list sorted.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        let file = file.into();
        let pos = self.files.binary_search(&file).unwrap_or_else(|p| p);
        self.files.insert(pos, file);
        self
    }

    /// Base name of the directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subdirectories(&self) -> &BTreeMap<String, DirectoryNode> {
        &self.subdirectories
    }

    /// Look up an immediate subdirectory by name.
    pub fn subdirectory(&self, name: &str) -> Option<&DirectoryNode> {
        self.subdirectories.get(name)
    }

    /// Names of the files directly in this directory, sorted.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// True when the directory holds neither files nor subdirectories.
    pub fn is_empty(&self) -> bool {
        self.subdirectories.is_empty() && self.files.is_empty()
    }

    /// Number of directories beneath this one, not counting itself.
    pub fn directory_count(&self) -> usize {
        self.subdirectories
            .values()
            .map(|child| 1 + child.directory_count())
            .sum()
    }

    /// Number of files in this directory and all of its descendants.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .values()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }
}
