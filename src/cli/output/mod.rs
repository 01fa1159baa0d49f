//! Output formatting module for CLI

mod json;
mod markdown;
mod terminal;

pub use json::JsonOutput;
pub use markdown::MarkdownReport;
pub use terminal::TerminalOutput;

use crate::error::ContentGuardError;
use crate::rules::results::AuditReport;

/// One audited draft of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub id: String,
    pub report: AuditReport,
}

/// Trait for rendering a single audit report
pub trait ReportRenderer {
    fn render_report(&self, report: &AuditReport) -> Result<String, ContentGuardError>;
}

/// Trait for rendering the reports of a batch run
pub trait BatchRenderer {
    fn render_batch(&self, entries: &[BatchEntry]) -> Result<String, ContentGuardError>;
}
