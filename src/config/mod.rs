//! Configuration module for static-import
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STATIC_IMPORT_*)
//! 3. `--config <PATH>`, else project config (./static-import.toml)
//! 4. User config (~/.config/static-import/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, load_with_warnings, parse_with_warnings, resolve, with_env_overrides,
    ConfigWarning, ResolvedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ImportConfig, OutputConfig, OutputFormat, Verbosity, DEFAULT_ASSET_DIR};
