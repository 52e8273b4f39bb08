//! Scanner - builds the full directory tree in memory

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ScanError, ScanResult};

use super::config::ScanConfig;
use super::node::DirectoryNode;

/// How a directory entry is treated by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    /// Symlink skipped because links are not followed.
    SkippedLink,
    /// Neither a file nor a directory: broken links, sockets, FIFOs, devices.
    Other,
}

/// Recursive directory scanner.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and everything beneath it.
    ///
    /// Either the complete tree is returned or the first error met anywhere
    /// in the descent.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult<DirectoryNode> {
        let root = root.as_ref();
        let metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut ancestors = HashSet::new();
        self.scan_dir(root, root_name(root), &mut ancestors)
    }

    fn scan_dir(
        &self,
        path: &Path,
        name: String,
        ancestors: &mut HashSet<PathBuf>,
    ) -> ScanResult<DirectoryNode> {
        let canonical = fs::canonicalize(path).map_err(|e| ScanError::io(path, e))?;
        if ancestors.contains(&canonical) {
            return Err(ScanError::Cycle {
                path: path.to_path_buf(),
            });
        }

        debug!("scanning {}", path.display());
        let (dirs, files) = self.list_entries(path)?;

        ancestors.insert(canonical.clone());
        let mut subdirectories = BTreeMap::new();
        for (child_name, child_path) in dirs {
            let child = self.scan_dir(&child_path, child_name.clone(), ancestors)?;
            // Lossy conversion can map distinct names onto the same key.
            if subdirectories.insert(child_name, child).is_some() {
                return Err(ScanError::DuplicateName { path: child_path });
            }
        }
        ancestors.remove(&canonical);

        Ok(DirectoryNode::new(name, subdirectories, files))
    }

    /// List the immediate entries of `path`, split into directories and files.
    /// The directory handle is released before this returns.
    fn list_entries(&self, path: &Path) -> ScanResult<(Vec<(String, PathBuf)>, Vec<String>)> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(path).map_err(|e| ScanError::io(path, e))? {
            let entry = entry.map_err(|e| ScanError::io(path, e))?;
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            match self.classify(&entry)? {
                EntryKind::Directory => dirs.push((name, entry_path)),
                EntryKind::File => files.push(name),
                EntryKind::SkippedLink => {
                    debug!("not following symlink {}", entry_path.display());
                }
                EntryKind::Other => {
                    debug!(
                        "skipping {}: neither a file nor a directory",
                        entry_path.display()
                    );
                }
            }
        }

        Ok((dirs, files))
    }

    fn classify(&self, entry: &DirEntry) -> ScanResult<EntryKind> {
        let file_type = entry
            .file_type()
            .map_err(|e| ScanError::io(entry.path(), e))?;
        if file_type.is_symlink() && !self.config.follow_links {
            return Ok(EntryKind::SkippedLink);
        }

        // Follows links, so a link is classified by its target.
        Ok(match fs::metadata(entry.path()) {
            Ok(m) if m.is_dir() => EntryKind::Directory,
            Ok(m) if m.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        })
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Scan `root` with the default configuration.
pub fn scan(root: impl AsRef<Path>) -> ScanResult<DirectoryNode> {
    Scanner::default().scan(root)
}

/// Base name used for the scan root.
///
/// Paths such as `.` or `..` have no final component of their own, so the
/// canonical path is consulted; the filesystem root keeps its display form.
fn root_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }
    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}
