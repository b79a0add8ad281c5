//! Output Rendering
//!
//! Reports an import on stdout, either as three status lines or as a single
//! JSON object.

use std::io::{self, Write};

use crate::application::{ImportOutcome, ImportStatus};
use crate::config::OutputFormat;

/// Trait for rendering import outcomes
pub trait ImportRenderer {
    /// Render the outcome to `out`
    fn render(&self, outcome: &ImportOutcome, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer: source, digest, confirmation
pub struct TextRenderer;

impl ImportRenderer for TextRenderer {
    fn render(&self, outcome: &ImportOutcome, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Importing file from path: {}", outcome.source.display())?;
        writeln!(out, "SHA-256 Hash: {}", outcome.digest)?;
        match outcome.status {
            ImportStatus::DryRun => {
                writeln!(out, "Would copy to {}", outcome.destination.display())
            }
            ImportStatus::Written | ImportStatus::Unchanged => {
                writeln!(out, "Successfully copied to {}", outcome.destination.display())
            }
        }
    }
}

/// JSON renderer for scripting
pub struct JsonRenderer;

impl ImportRenderer for JsonRenderer {
    fn render(&self, outcome: &ImportOutcome, out: &mut dyn Write) -> io::Result<()> {
        let json = serde_json::json!({
            "event": "import",
            "status": outcome.status,
            "unchanged": outcome.status == ImportStatus::Unchanged,
            "source": outcome.source.display().to_string(),
            "digest": outcome.digest.as_str(),
            "extension": outcome.extension.as_str(),
            "destination": outcome.destination.display().to_string(),
            "bytes": outcome.bytes,
        });
        writeln!(out, "{}", json)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn ImportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Print the outcome to stdout in the requested format
pub fn report(outcome: &ImportOutcome, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    create_renderer(format).render(outcome, &mut lock)?;
    lock.flush()
}
