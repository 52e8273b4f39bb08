//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Number of spaces before the root line. Deeper lines add two per level.
    pub indent: usize,
    /// Append a "N directories, M files" line after the tree.
    pub summary: bool,
}
