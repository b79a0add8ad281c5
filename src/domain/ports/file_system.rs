//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the import use case to read sources and place assets
//! without depending on concrete implementations (local, in-memory).

use std::io;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
///
/// Every variant keeps the `io::Error` it was classified from.
#[derive(Debug)]
pub enum FsError {
    /// File (or its parent directory) not found
    NotFound(PathBuf, io::Error),
    /// Permission denied
    PermissionDenied(PathBuf, io::Error),
    /// Any other I/O error
    Io(PathBuf, io::Error),
}

impl FsError {
    /// Classify an I/O error that happened while touching `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path, err),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path, err),
            _ => FsError::Io(path, err),
        }
    }

    /// Unwrap the underlying `io::Error`
    pub fn into_io_error(self) -> io::Error {
        match self {
            FsError::NotFound(_, err) | FsError::PermissionDenied(_, err) | FsError::Io(_, err) => {
                err
            }
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path, _) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path, _) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::NotFound(_, err) | FsError::PermissionDenied(_, err) | FsError::Io(_, err) => {
                Some(err)
            }
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read the full content of a file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content, truncating or creating the file
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Write content via a sibling temp file and rename
    ///
    /// The parent directory must already exist. A failure leaves any
    /// previous file at `path` untouched.
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;
}
