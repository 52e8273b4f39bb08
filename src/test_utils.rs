//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing to `target`.
    /// `target` is used verbatim, so relative targets resolve from the link.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Build a balanced tree `depth` levels deep with `width` subdirectories
    /// and `files` files per directory.
    pub fn populate(&self, depth: usize, width: usize, files: usize) {
        fn fill(dir: &Path, depth: usize, width: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{}.txt", f)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for w in 0..width {
                let child = dir.join(format!("dir_{}", w));
                fs::create_dir(&child).expect("Failed to create dir");
                fill(&child, depth - 1, width, files);
            }
        }
        fill(self.dir.path(), depth, width, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
