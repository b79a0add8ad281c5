//! Error types for static-import
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Main error type for import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// Source file could not be opened or read
    #[error("cannot read source '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination could not be written (missing or unwritable asset directory)
    #[error("cannot write destination '{}': {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension would escape the asset directory or is otherwise unusable
    #[error("invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    /// No override given and the source path has no suffix
    #[error("cannot infer an extension from '{}' - pass --ext <EXT>", path.display())]
    MissingExtension { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
