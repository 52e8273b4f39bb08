//! Configuration types for the scanner

/// Configuration for directory scanning behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Descend into symlinked directories and list symlinked files.
    /// When false, symlink entries are skipped entirely.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { follow_links: true }
    }
}
