//! Terminal output formatting with colors

use crate::error::ContentGuardError;
use colored::Colorize;

use super::{BatchEntry, BatchRenderer, ReportRenderer};
use crate::platform::PlatformFlags;
use crate::rules::results::{AuditReport, Finding, Severity};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, platform: &str, flags: PlatformFlags) -> String {
        let platform = if platform.is_empty() {
            "(none)"
        } else {
            platform
        };
        let mut policies = Vec::new();
        if flags.platform_a {
            policies.push("baijiahao");
        }
        if flags.platform_b {
            policies.push("wechat");
        }
        let policies = if policies.is_empty() {
            "general".to_string()
        } else {
            policies.join(", ")
        };

        format!(
            "\n{} v{}\n\n{} {}\n{} {}\n",
            "contentguard".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Platform:".dimmed(),
            platform.white().bold(),
            "Policies:".dimmed(),
            policies.yellow()
        )
    }

    fn format_findings(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  AUDIT RESULTS".bold()
        ));

        let violations: Vec<_> = report.violations().collect();
        if !violations.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "❌ VIOLATIONS".red().bold(),
                violations.len()
            ));
            for finding in violations {
                output.push_str(&self.format_violation(finding));
            }
            output.push('\n');
        }

        let suggestions: Vec<_> = report.suggestions().collect();
        if !suggestions.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "💡 SUGGESTIONS".yellow().bold(),
                suggestions.len()
            ));
            for suggestion in suggestions {
                output.push_str(&format!("  {} {}\n", "•".dimmed(), suggestion));
            }
            output.push('\n');
        }

        let safe: Vec<_> = report.safe_items().collect();
        if !safe.is_empty() {
            output.push_str(&format!("{} ({})\n", "✅ SAFE".green().bold(), safe.len()));
            for item in safe {
                output.push_str(&format!("  {} {}\n", "•".dimmed(), item));
            }
            output.push('\n');
        }

        output
    }

    fn format_violation(&self, finding: &Finding) -> String {
        let kind = finding.label.as_deref().unwrap_or(&finding.category);
        let mut output = format!(
            "  {} [{}] {}: {}\n",
            "•".dimmed(),
            finding.rule_id.cyan(),
            kind.red(),
            finding.message
        );

        if let Some(remediation) = &finding.remediation {
            output.push_str(&format!("    {} {}\n", "└─".dimmed(), remediation.dimmed()));
        }

        output
    }

    fn format_summary(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        let violation_count = report.count_by_severity(Severity::Violation);
        output.push_str(&format!(
            "Violations: {} │ Suggestions: {} │ Safe: {}\n",
            violation_count.to_string().red().bold(),
            report
                .count_by_severity(Severity::Suggestion)
                .to_string()
                .yellow()
                .bold(),
            report
                .count_by_severity(Severity::Safe)
                .to_string()
                .green()
                .bold()
        ));

        if violation_count > 0 {
            output.push_str(&format!(
                "\n{} {} violation(s) must be fixed before publishing.\n",
                "⚠️ ".yellow(),
                violation_count
            ));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &AuditReport) -> Result<String, ContentGuardError> {
        let mut output = String::new();

        output.push_str(&self.format_header(&report.platform, report.flags));
        output.push_str(&self.format_findings(report));
        output.push_str(&self.format_summary(report));

        Ok(output)
    }
}

impl BatchRenderer for TerminalOutput {
    fn render_batch(&self, entries: &[BatchEntry]) -> Result<String, ContentGuardError> {
        let mut output = format!(
            "\n{} v{}\n\n",
            "contentguard".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );

        for entry in entries {
            let count = entry.report.count_by_severity(Severity::Violation);
            let status = if count > 0 {
                format!("{} violation(s)", count).red().bold()
            } else {
                "clean".green().bold()
            };
            output.push_str(&format!("{} {}\n", entry.id.cyan(), status));

            for finding in entry.report.violations() {
                output.push_str(&self.format_violation(finding));
            }
        }

        let flagged = entries
            .iter()
            .filter(|e| e.report.has_violations())
            .count();
        output.push_str(&format!(
            "\n{}\nDrafts: {} │ Flagged: {}\n",
            "━".repeat(50).dimmed(),
            entries.len().to_string().bold(),
            flagged.to_string().red().bold()
        ));

        Ok(output)
    }
}
