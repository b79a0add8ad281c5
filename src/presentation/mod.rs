//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Diagnostic logging setup
//! - Output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use factory::create_import_use_case;
pub use output::report;
