//! Asset Extension Value Object
//!
//! The filename suffix appended to a digest. Either supplied verbatim by the
//! operator or taken from the source path, then checked so the resulting
//! filename stays inside the asset directory.

use std::fmt;
use std::path::Path;

use crate::error::{ImportError, ImportResult};

/// A validated file extension (without the joining dot)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Validate an extension string
    ///
    /// Rejects anything that could turn `<digest>.<ext>` into a different
    /// directory entry: separators, control characters, `.` and `..`.
    /// Everything else (including a leading dot) is kept verbatim.
    pub fn new(raw: &str) -> ImportResult<Self> {
        let reject = |reason: &str| ImportError::InvalidExtension {
            extension: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(reject("extension is empty"));
        }
        if raw.contains(['/', '\\']) {
            return Err(reject("contains a path separator"));
        }
        if raw.chars().any(char::is_control) {
            return Err(reject("contains a control character"));
        }
        if raw == "." || raw == ".." {
            return Err(reject("is a relative directory reference"));
        }

        Ok(Self(raw.to_string()))
    }

    /// Get the extension string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the extension for an import
///
/// A non-empty `override_ext` wins and is used verbatim. Otherwise the suffix
/// of the final path component after its last dot is used. Dotfiles such as
/// `.gitignore` have no suffix; a suffix that is not UTF-8 is refused rather
/// than rewritten.
pub fn resolve_extension(source: &Path, override_ext: Option<&str>) -> ImportResult<Extension> {
    if let Some(ext) = override_ext.filter(|e| !e.is_empty()) {
        return Extension::new(ext);
    }

    match source.extension() {
        Some(ext) if !ext.is_empty() => match ext.to_str() {
            Some(ext) => Extension::new(ext),
            None => Err(ImportError::InvalidExtension {
                extension: ext.to_string_lossy().into_owned(),
                reason: "not valid UTF-8".to_string(),
            }),
        },
        _ => Err(ImportError::MissingExtension {
            path: source.to_path_buf(),
        }),
    }
}
