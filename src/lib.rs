//! static-import - content-addressed asset importer
//!
//! Copies a file into an asset directory (default `assets/img`) under the name
//! `<sha256-hex>.<ext>`. The destination depends only on the file's content and
//! extension, so importing the same bytes twice lands on the same path.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ImportOptions, ImportOutcome, ImportStatus, ImportUseCase};
pub use config::{Config, OutputFormat, Verbosity};
pub use domain::entities::{ImportRequest, ImportedAsset};
pub use domain::value_objects::{compute_digest, resolve_extension, ContentDigest, Extension};
pub use error::{ImportError, ImportResult};
pub use infrastructure::LocalFs;
pub use presentation::output::report;
