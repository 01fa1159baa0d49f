//! Platform formatting rules
//!
//! 百家号-family platforms cap the title length (a violation) and recommend
//! short paragraphs for mobile reading (advisory only).

use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::results::{Finding, Severity};
use crate::text;

pub struct FormattingRules;

impl RuleCategory for FormattingRules {
    fn name(&self) -> &'static str {
        "formatting"
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ctx.flags.platform_a {
            return findings;
        }

        if ctx.config.is_rule_enabled("formatting/title-length") {
            findings.extend(check_title_length(ctx));
        }

        if ctx.config.is_rule_enabled("formatting/paragraph-length") {
            findings.extend(check_paragraph_length(ctx));
        }

        findings
    }
}

fn check_title_length(ctx: &AuditContext<'_>) -> Option<Finding> {
    let max = ctx.config.limits.title_max_chars;
    let length = text::char_len(ctx.title);

    if length <= max {
        return None;
    }

    Some(
        Finding::new(
            "FMT001",
            "formatting",
            Severity::Violation,
            format!("标题长度{}字", length),
        )
        .with_label("标题规范")
        .with_remediation(format!(
            "百家号要求标题控制在{}字以内，以确保移动端显示完整。",
            max
        )),
    )
}

fn check_paragraph_length(ctx: &AuditContext<'_>) -> Option<Finding> {
    let max = ctx.config.limits.paragraph_max_chars;
    let long_paragraphs = text::paragraphs(&ctx.body)
        .filter(|p| text::char_len(p) > max)
        .count();

    if long_paragraphs == 0 {
        return None;
    }

    Some(Finding::new(
        "FMT002",
        "formatting",
        Severity::Suggestion,
        format!(
            "检测到{}个段落超过{}字，建议分段以提升移动端阅读体验。",
            long_paragraphs, max
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::draft::Draft;
    use crate::lexicon::Lexicon;
    use crate::platform::PlatformFlags;
    use pretty_assertions::assert_eq;

    const PLATFORM_A: PlatformFlags = PlatformFlags {
        platform_a: true,
        platform_b: false,
    };

    fn run_with(draft: &Draft, flags: PlatformFlags, config: &Config) -> Vec<Finding> {
        let lexicon = Lexicon::embedded();
        let ctx = AuditContext::new(draft, flags, &lexicon, config);
        FormattingRules.run(&ctx)
    }

    fn run(draft: &Draft, flags: PlatformFlags) -> Vec<Finding> {
        run_with(draft, flags, &Config::default())
    }

    #[test]
    fn test_title_at_limit_passes() {
        let draft = Draft::new("字".repeat(30), "", "");
        assert!(run(&draft, PLATFORM_A).is_empty());
    }

    #[test]
    fn test_title_over_limit_fails() {
        let draft = Draft::new("字".repeat(31), "", "");
        let findings = run(&draft, PLATFORM_A);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Violation);
        assert_eq!(findings[0].message, "标题长度31字");
        assert_eq!(findings[0].label.as_deref(), Some("标题规范"));
    }

    #[test]
    fn test_title_length_ignores_markup_free_body() {
        let draft = Draft::new("短标题", &format!("<p>{}</p>", "字".repeat(40)), "");
        assert!(run(&draft, PLATFORM_A).is_empty());
    }

    #[test]
    fn test_rules_only_apply_to_platform_a() {
        let draft = Draft::new("字".repeat(50), "字".repeat(300), "");
        assert!(run(&draft, PlatformFlags::default()).is_empty());
    }

    #[test]
    fn test_long_paragraphs_counted() {
        let body = format!(
            "<p>{}</p>\n<p>短段落</p>\n<p>{}</p>\n\n",
            "长".repeat(201),
            "长".repeat(250)
        );
        let draft = Draft::new("标题", body, "");
        let findings = run(&draft, PLATFORM_A);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Suggestion);
        assert!(findings[0].message.starts_with("检测到2个段落超过200字"));
    }

    #[test]
    fn test_paragraph_at_limit_passes() {
        let draft = Draft::new("标题", "长".repeat(200), "");
        assert!(run(&draft, PLATFORM_A).is_empty());
    }

    #[test]
    fn test_configured_limits() {
        let mut config = Config::default();
        config.limits.title_max_chars = 5;
        let draft = Draft::new("六个字的标题", "", "");

        let findings = run_with(&draft, PLATFORM_A, &config);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].remediation.as_deref().unwrap().contains("5字以内"));
    }

    #[test]
    fn test_disabled_paragraph_rule() {
        let mut config = Config::default();
        config.rules.insert(
            "formatting/paragraph-length".to_string(),
            crate::config::RuleConfig { enabled: false },
        );
        let draft = Draft::new("标题", "长".repeat(300), "");

        assert!(run_with(&draft, PLATFORM_A, &config).is_empty());
    }
}
