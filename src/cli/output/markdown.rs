//! Markdown report output

use crate::error::ContentGuardError;

use super::ReportRenderer;
use crate::rules::results::{AuditReport, Severity};

pub struct MarkdownReport;

impl MarkdownReport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl ReportRenderer for MarkdownReport {
    fn render_report(&self, report: &AuditReport) -> Result<String, ContentGuardError> {
        let violation_count = report.count_by_severity(Severity::Violation);
        let status = if violation_count > 0 {
            "❌ Needs changes"
        } else {
            "✅ Ready to publish"
        };
        let platform = if report.platform.is_empty() {
            "(none)"
        } else {
            report.platform.as_str()
        };

        let mut output = String::new();
        output.push_str("# Content Compliance Report\n\n");
        output.push_str(&format!("**Platform:** {}  \n", platform));
        output.push_str(&format!("**Status:** {}\n\n", status));

        output.push_str("| Violations | Suggestions | Safe |\n");
        output.push_str("|---|---|---|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            violation_count,
            report.count_by_severity(Severity::Suggestion),
            report.count_by_severity(Severity::Safe)
        ));

        if violation_count > 0 {
            output.push_str("## Violations\n\n");
            output.push_str("| Rule | Type | Detected | Suggestion |\n");
            output.push_str("|---|---|---|---|\n");
            for finding in report.violations() {
                output.push_str(&format!(
                    "| `{}` | {} | {} | {} |\n",
                    finding.rule_id,
                    escape_cell(finding.label.as_deref().unwrap_or(&finding.category)),
                    escape_cell(&finding.message),
                    escape_cell(finding.remediation.as_deref().unwrap_or(""))
                ));
            }
            output.push('\n');
        }

        let suggestions: Vec<_> = report.suggestions().collect();
        if !suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
            output.push('\n');
        }

        let safe: Vec<_> = report.safe_items().collect();
        if !safe.is_empty() {
            output.push_str("## Safe\n\n");
            for item in safe {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "---\n*Generated by contentguard v{}*\n",
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }
}
