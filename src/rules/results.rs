//! # Audit Results Structures
//!
//! This module defines the data structures for representing audit findings
//! and the report assembled from them.
//!
//! ## Overview
//!
//! - [`Severity`] - Finding severity (Violation, Suggestion, Safe)
//! - [`Finding`] - Individual audit finding with matched phrase and remediation
//! - [`AuditReport`] - Ordered findings from one audit run
//! - [`WireReport`] - The `{violations, safeItems, suggestions}` shape consumed by the dashboard
//!
//! ## Examples
//!
//! ```rust
//! use contentguard::rules::{AuditReport, Finding, Severity};
//!
//! let mut report = AuditReport::new("百家号 - 财经号", Default::default());
//!
//! report.add_finding(
//!     Finding::new("LEX001", "absolute", Severity::Violation, "检测到\"稳赚\"")
//!         .with_label("绝对违禁词")
//!         .with_matched("稳赚")
//!         .with_remediation("请立即删除。"),
//! );
//! report.add_finding(Finding::new("AD001", "advertising", Severity::Suggestion, "建议标明\"广告\""));
//!
//! assert!(report.has_violations());
//! assert_eq!(report.suggestions().count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::platform::PlatformFlags;

/// Severity of an audit finding.
///
/// - **Violation** - Blocks publication until resolved
/// - **Suggestion** - Non-blocking advisory note
/// - **Safe** - Confirmation that a compliant signal was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed before publishing.
    Violation,
    /// Advisory; the draft may be published as is.
    Suggestion,
    /// A compliant signal was detected.
    Safe,
}

/// A single audit finding.
///
/// Violations carry a `label` (the finding type shown to the user), a message
/// describing what was detected and a remediation. Suggestions and safe items
/// only need a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule identifier (e.g., "LEX001", "FMT001")
    pub rule_id: String,

    /// Rule category that produced the finding (e.g., "extreme", "disclosure")
    pub category: String,

    /// Severity of the finding
    pub severity: Severity,

    /// Finding type shown to the user (e.g., "极限用语")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// What was detected, or the text of a suggestion/safe item
    pub message: String,

    /// Trigger phrase that matched, for lexical findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,

    /// Suggested remediation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        rule_id: impl Into<String>,
        category: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category: category.into(),
            severity,
            label: None,
            message: message.into(),
            matched: None,
            remediation: None,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the matched trigger phrase
    pub fn with_matched(mut self, phrase: impl Into<String>) -> Self {
        self.matched = Some(phrase.into());
        self
    }

    /// Set the remediation
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// Report of a single audit, findings kept in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Platform label the draft was audited for
    pub platform: String,

    /// Policy flags derived from the label
    pub flags: PlatformFlags,

    findings: Vec<Finding>,
}

impl AuditReport {
    pub fn new(platform: impl Into<String>, flags: PlatformFlags) -> Self {
        Self {
            platform: platform.into(),
            flags,
            findings: Vec::new(),
        }
    }

    /// Add a finding
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Add multiple findings
    pub fn add_findings(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// All findings in evaluation order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one severity, in evaluation order
    pub fn findings_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Findings produced by one category
    pub fn findings_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    pub fn violations(&self) -> impl Iterator<Item = &Finding> {
        self.findings_by_severity(Severity::Violation)
    }

    /// Text of every safe item
    pub fn safe_items(&self) -> impl Iterator<Item = &str> {
        self.findings_by_severity(Severity::Safe)
            .map(|f| f.message.as_str())
    }

    /// Text of every suggestion
    pub fn suggestions(&self) -> impl Iterator<Item = &str> {
        self.findings_by_severity(Severity::Suggestion)
            .map(|f| f.message.as_str())
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings_by_severity(severity).count()
    }

    /// Whether any blocking finding was produced
    pub fn has_violations(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Violation)
    }

    /// Project the report to the dashboard wire shape
    pub fn to_wire(&self) -> WireReport {
        WireReport {
            violations: self
                .violations()
                .map(|f| WireViolation {
                    kind: f.label.clone().unwrap_or_else(|| f.category.clone()),
                    content: f.message.clone(),
                    suggestion: f.remediation.clone().unwrap_or_default(),
                })
                .collect(),
            safe_items: self.safe_items().map(str::to_string).collect(),
            suggestions: self.suggestions().map(str::to_string).collect(),
        }
    }
}

/// Violation entry of the wire report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireViolation {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub suggestion: String,
}

/// `{ violations, safeItems, suggestions }`, as the dashboard displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReport {
    pub violations: Vec<WireViolation>,
    pub safe_items: Vec<String>,
    pub suggestions: Vec<String>,
}
