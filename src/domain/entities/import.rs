//! Import entities
//!
//! `ImportRequest` is what the operator asked for; `ImportedAsset` is the
//! content-addressed file derived from it. Neither is persisted.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{resolve_extension, ContentDigest, Extension};
use crate::error::ImportResult;

/// A single import as requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    source: PathBuf,
    ext_override: Option<String>,
}

impl ImportRequest {
    /// Create a request for `source` with no extension override
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ext_override: None,
        }
    }

    /// Builder: override the extension inferred from the source path
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.ext_override = Some(ext.into());
        self
    }

    /// Builder: set (or clear) the extension override
    pub fn with_extension_override(mut self, ext: Option<String>) -> Self {
        self.ext_override = ext;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn ext_override(&self) -> Option<&str> {
        self.ext_override.as_deref()
    }

    /// Resolve the extension this request will be stored under
    pub fn resolve_extension(&self) -> ImportResult<Extension> {
        resolve_extension(&self.source, self.ext_override())
    }
}

/// A content-addressed asset ready to be placed in the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedAsset {
    content: Vec<u8>,
    digest: ContentDigest,
    extension: Extension,
}

impl ImportedAsset {
    /// Hash `content` and pair it with its resolved extension
    pub fn new(content: Vec<u8>, extension: Extension) -> Self {
        let digest = ContentDigest::from_bytes(&content);
        Self {
            content,
            digest,
            extension,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// File name inside the asset directory: `<digest>.<extension>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.digest, self.extension)
    }

    /// Destination path under `asset_dir`
    ///
    /// Depends only on the content digest and extension, never on where the
    /// source came from.
    pub fn destination(&self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(self.file_name())
    }
}
