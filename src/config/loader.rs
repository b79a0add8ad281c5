//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImportError, ImportResult};

use super::types::{Config, OutputFormat, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "static-import.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ImportResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML `content` as if it were read from `path`.
pub fn parse_with_warnings(content: &str, path: &Path) -> ImportResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ImportError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file that applies when none was given explicitly
///
/// Project config wins over user config.
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.is_file() {
            return Some(project_config);
        }
    }

    let user_config = dirs_config_dir()?.join("static-import/config.toml");
    user_config.is_file().then_some(user_config)
}

/// Configuration as resolved for one invocation
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Effective configuration, environment overrides applied
    pub config: Config,
    /// File the configuration came from, if any
    pub file: Option<PathBuf>,
    /// Unknown keys found in `file`
    pub warnings: Vec<ConfigWarning>,
    /// A discovered file that was skipped because it failed to load
    pub skipped: Option<(PathBuf, String)>,
}

/// Resolve the configuration for one invocation
///
/// An explicit path must load. A discovered project or user config that fails
/// to load is skipped and recorded in `skipped`.
pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> ImportResult<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        resolved.config = config;
        resolved.warnings = warnings;
        resolved.file = Some(path.to_path_buf());
    } else if let Some(path) = discover(project_root) {
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                resolved.config = config;
                resolved.warnings = warnings;
                resolved.file = Some(path);
            }
            Err(e) => resolved.skipped = Some((path, e.to_string())),
        }
    }

    resolved.config = with_env_overrides(resolved.config);
    Ok(resolved)
}

/// Apply environment variable overrides (STATIC_IMPORT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // STATIC_IMPORT_ASSET_DIR
    if let Some(dir) = var("STATIC_IMPORT_ASSET_DIR").filter(|d| !d.is_empty()) {
        config.import.asset_dir = PathBuf::from(dir);
    }

    // STATIC_IMPORT_ATOMIC_WRITES
    if let Some(val) = var("STATIC_IMPORT_ATOMIC_WRITES") {
        config.import.atomic_writes = val.to_lowercase() != "false" && val != "0";
    }

    // STATIC_IMPORT_VERBOSITY
    if let Some(verbosity) = var("STATIC_IMPORT_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lossy(&verbosity);
    }

    // STATIC_IMPORT_FORMAT
    if let Some(format) = var("STATIC_IMPORT_FORMAT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

/// 1-based line on which `key` is assigned or opened as a table, if any
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            let lhs = match line.strip_prefix('[') {
                Some(header) => Some(header.trim_matches(['[', ']'])),
                None => line.split_once('=').map(|(lhs, _)| lhs),
            };
            lhs.and_then(|lhs| lhs.rsplit('.').next())
                .is_some_and(|last| last.trim().trim_matches('"') == key)
        })
        .map(|i| i + 1)
}

/// Known config keys, used for "did you mean" hints
const KNOWN_KEYS: &[&str] = &[
    "import",
    "asset_dir",
    "atomic_writes",
    "output",
    "verbosity",
    "format",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 2)
        .map(|(_, known)| known.to_string())
}

/// Character-level edit distance, one row of the table at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
