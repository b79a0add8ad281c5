//! static-import CLI
//!
//! Usage: static-import <FILE> [--ext <EXT>] [--asset-dir <DIR>] [--dry-run] [--json]

use anyhow::{Context, Result};
use clap::Parser;

use static_import::config::{Config, ConfigWarning, OutputFormat, ResolvedConfig};
use static_import::presentation::{create_import_use_case, logging, output, Cli};
use static_import::{ImportOptions, ImportRequest};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let resolved = Config::resolve(cli.config.as_deref(), Some(&cwd)).with_context(|| {
        match &cli.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to load config".to_string(),
        }
    })?;

    logging::init(cli.verbose, resolved.config.output.verbosity);
    log_config(&resolved);

    cmd_import(&cli, &resolved.config)
}

fn cmd_import(cli: &Cli, config: &Config) -> Result<()> {
    let mut options = ImportOptions::from(&config.import).with_dry_run(cli.dry_run);
    if let Some(dir) = &cli.asset_dir {
        options.asset_dir = dir.clone();
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let request = ImportRequest::new(&cli.file).with_extension_override(cli.ext.clone());
    let outcome = create_import_use_case(options).execute(&request)?;

    output::report(&outcome, format).context("failed to write report")?;
    Ok(())
}

fn log_config(resolved: &ResolvedConfig) {
    if let Some(file) = &resolved.file {
        tracing::debug!(file = %file.display(), "loaded config");
    }
    if let Some((file, message)) = &resolved.skipped {
        tracing::warn!(file = %file.display(), "ignoring config file: {message}");
    }
    for warning in &resolved.warnings {
        log_config_warning(warning);
    }
}

fn log_config_warning(w: &ConfigWarning) {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    match &w.suggestion {
        Some(suggestion) => tracing::warn!(
            "Unknown config key '{}' in {} (did you mean '{}'?)",
            w.key,
            location,
            suggestion
        ),
        None => tracing::warn!("Unknown config key '{}' in {}", w.key, location),
    }
}
