//! Import Use Case
//!
//! Orchestrates the import flow:
//! 1. Read the source bytes
//! 2. Resolve the extension
//! 3. Compute the SHA-256 digest
//! 4. Place the bytes at `<asset dir>/<digest>.<ext>`
//!
//! Reporting is left to the presentation layer.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ImportConfig, DEFAULT_ASSET_DIR};
use crate::domain::entities::{ImportRequest, ImportedAsset};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::{ContentDigest, Extension};
use crate::error::{ImportError, ImportResult};

/// Options for the import use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Directory receiving the asset; must already exist
    pub asset_dir: PathBuf,
    /// Temp file + rename instead of truncating in place
    pub atomic_writes: bool,
    /// Dry run (don't write files)
    pub dry_run: bool,
}

impl ImportOptions {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            atomic_writes: true,
            dry_run: false,
        }
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        Self::new(&config.asset_dir).with_atomic_writes(config.atomic_writes)
    }
}

/// What happened at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Bytes were written (new file or replaced content)
    Written,
    /// Destination already held identical bytes
    Unchanged,
    /// Nothing was written
    DryRun,
}

/// Result of a single import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub source: PathBuf,
    pub digest: ContentDigest,
    pub extension: Extension,
    pub destination: PathBuf,
    pub bytes: usize,
    pub status: ImportStatus,
}

/// Import use case - copies one file into the asset directory
///
/// Parameterized by its file system port so tests can run in memory.
pub struct ImportUseCase<FS: FileSystem> {
    file_system: FS,
    options: ImportOptions,
}

impl<FS: FileSystem> ImportUseCase<FS> {
    pub fn new(file_system: FS, options: ImportOptions) -> Self {
        Self {
            file_system,
            options,
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Execute the import use case
    pub fn execute(&self, request: &ImportRequest) -> ImportResult<ImportOutcome> {
        let asset = self.load(request)?;
        let destination = asset.destination(&self.options.asset_dir);

        let status = if self.options.dry_run {
            if !self.file_system.is_dir(&self.options.asset_dir) {
                tracing::warn!(
                    asset_dir = %self.options.asset_dir.display(),
                    "asset directory does not exist; a real import would fail"
                );
            }
            tracing::info!(destination = %destination.display(), "dry run, skipping write");
            ImportStatus::DryRun
        } else {
            self.write(&asset)?
        };

        Ok(ImportOutcome {
            source: request.source().to_path_buf(),
            digest: asset.digest().clone(),
            extension: asset.extension().clone(),
            destination,
            bytes: asset.content().len(),
            status,
        })
    }

    /// Read the source and derive the content-addressed asset
    pub fn load(&self, request: &ImportRequest) -> ImportResult<ImportedAsset> {
        let source = request.source();
        let content = self
            .file_system
            .read(source)
            .map_err(|e| ImportError::SourceRead {
                path: source.to_path_buf(),
                source: e.into_io_error(),
            })?;
        tracing::debug!(source = %source.display(), bytes = content.len(), "read source");

        let extension = request.resolve_extension()?;
        let asset = ImportedAsset::new(content, extension);
        tracing::debug!(digest = %asset.digest(), extension = %asset.extension(), "computed digest");

        Ok(asset)
    }

    /// Place the asset's bytes at its destination
    ///
    /// Skips the write when the destination already holds the same bytes.
    pub fn write(&self, asset: &ImportedAsset) -> ImportResult<ImportStatus> {
        let destination = asset.destination(&self.options.asset_dir);

        if self.is_unchanged(asset, &destination) {
            tracing::info!(destination = %destination.display(), "destination already up to date");
            return Ok(ImportStatus::Unchanged);
        }

        let result = if self.options.atomic_writes {
            tracing::debug!(destination = %destination.display(), "atomic write");
            self.file_system.write_atomic(&destination, asset.content())
        } else {
            tracing::debug!(destination = %destination.display(), "direct write");
            self.file_system.write(&destination, asset.content())
        };

        result.map_err(|e| destination_error(e, &destination))?;
        tracing::info!(destination = %destination.display(), bytes = asset.content().len(), "wrote asset");
        Ok(ImportStatus::Written)
    }

    fn is_unchanged(&self, asset: &ImportedAsset, destination: &Path) -> bool {
        if !self.file_system.exists(destination) {
            return false;
        }
        match self.file_system.read(destination) {
            Ok(existing) => asset.digest().matches(&existing),
            Err(e) => {
                tracing::debug!(error = %e, "could not read existing destination");
                false
            }
        }
    }
}

fn destination_error(err: FsError, destination: &Path) -> ImportError {
    ImportError::DestinationWrite {
        path: destination.to_path_buf(),
        source: err.into_io_error(),
    }
}
