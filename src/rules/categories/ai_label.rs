//! AI-content labeling rules
//!
//! Text that mentions AI should say whether it was AI-generated. The mention
//! check is a loose, case-insensitive substring heuristic.

use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::results::{Finding, Severity};

const LABEL_MISSING: &str = "如本文包含AI生成内容，请根据2025新规，在开头或结尾标注\"本服务包含AI分析，不构成专业投资建议\"，否则可能被按侵权处理。";
const LABEL_PRESENT: &str = "已标注AI生成内容";

pub struct AiLabelRules;

impl RuleCategory for AiLabelRules {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ctx.config.is_rule_enabled("ai/label") {
            return findings;
        }

        let terms = &ctx.lexicon.ai;
        let labeled = terms
            .disclosure
            .iter()
            .any(|phrase| ctx.full_text.contains(phrase.as_str()));

        let lowered = ctx.full_text.to_lowercase();
        let mentions_ai = terms
            .mentions
            .iter()
            .any(|term| lowered.contains(term.to_lowercase().as_str()));

        if mentions_ai && !labeled {
            findings.push(Finding::new(
                "AI001",
                "ai",
                Severity::Suggestion,
                LABEL_MISSING,
            ));
        } else if labeled {
            findings.push(Finding::new("AI001", "ai", Severity::Safe, LABEL_PRESENT));
        }

        findings
    }
}
