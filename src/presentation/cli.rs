//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Flags beat environment variables, which beat config files.

use std::path::PathBuf;

use clap::Parser;

/// static-import - copy a file into the asset directory under its SHA-256 name
#[derive(Parser, Debug)]
#[command(name = "static-import")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the file to be imported
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// File extension (inferred from FILE when omitted)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Destination directory; must already exist [default: assets/img]
    #[arg(long, value_name = "DIR")]
    pub asset_dir: Option<PathBuf>,

    /// Config file [default: ./static-import.toml, then user config]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dry run - show where the file would go without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
