//! JSON output formatting
//!
//! By default reports are projected to the dashboard shape
//! (`violations`, `safeItems`, `suggestions`). The detailed form serializes
//! every finding with its rule id, category and matched phrase.

use crate::error::ContentGuardError;
use serde::Serialize;

use super::{BatchEntry, BatchRenderer, ReportRenderer};
use crate::rules::results::{AuditReport, Severity, WireReport};

pub struct JsonOutput {
    detailed: bool,
}

impl JsonOutput {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Serialize)]
struct DetailedOutput<'a> {
    version: &'static str,
    violation_count: usize,
    suggestion_count: usize,
    safe_count: usize,
    #[serde(flatten)]
    report: &'a AuditReport,
}

#[derive(Serialize)]
struct BatchItem<'a> {
    id: &'a str,
    report: WireReport,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &AuditReport) -> Result<String, ContentGuardError> {
        if !self.detailed {
            return Ok(serde_json::to_string_pretty(&report.to_wire())?);
        }

        let output = DetailedOutput {
            version: env!("CARGO_PKG_VERSION"),
            violation_count: report.count_by_severity(Severity::Violation),
            suggestion_count: report.count_by_severity(Severity::Suggestion),
            safe_count: report.count_by_severity(Severity::Safe),
            report,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl BatchRenderer for JsonOutput {
    fn render_batch(&self, entries: &[BatchEntry]) -> Result<String, ContentGuardError> {
        let items: Vec<BatchItem<'_>> = entries
            .iter()
            .map(|entry| BatchItem {
                id: &entry.id,
                report: entry.report.to_wire(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&items)?)
    }
}
