//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ImportResult;

use super::loader::{self, ResolvedConfig};

/// Default destination directory, relative to the working directory
pub const DEFAULT_ASSET_DIR: &str = "assets/img";

/// Import configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Directory receiving `<digest>.<ext>` files; never created
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// Write through a temp file + rename instead of truncating in place
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            atomic_writes: true,
        }
    }
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSET_DIR)
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a user-supplied level, falling back to `Normal`
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// One JSON object for scripting
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub import: ImportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve explicit, project or user config, then environment overrides
    pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> ImportResult<ResolvedConfig> {
        loader::resolve(explicit, project_root)
    }
}
