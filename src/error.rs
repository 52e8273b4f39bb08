//! Error types for directory scanning

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result alias used by the scanner.
pub type ScanResult<T> = Result<T, ScanError>;

/// A failure that aborts a whole scan.
///
/// The scanner never returns a partially populated tree: the first error
/// encountered anywhere in the descent ends the scan.
#[derive(Debug)]
pub enum ScanError {
    /// A directory could not be listed or one of its entries could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The scan root exists but is not a directory.
    NotADirectory { path: PathBuf },
    /// A symbolic link led back to a directory already on the descent path.
    Cycle { path: PathBuf },
    /// Two sibling directories share a name once converted to UTF-8, so
    /// one of them could not be represented in the tree.
    DuplicateName { path: PathBuf },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Io { path, .. } => path,
            ScanError::NotADirectory { path } => path,
            ScanError::Cycle { path } => path,
            ScanError::DuplicateName { path } => path,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io { path, source } => {
                write!(f, "cannot access '{}': {}", path.display(), source)
            }
            ScanError::NotADirectory { path } => {
                write!(f, "'{}' is not a directory", path.display())
            }
            ScanError::Cycle { path } => {
                write!(f, "symlink cycle detected at '{}'", path.display())
            }
            ScanError::DuplicateName { path } => write!(
                f,
                "'{}' has a sibling directory with the same displayed name",
                path.display()
            ),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
