//! Contact information rules
//!
//! When the body mentions a contact channel, a well-formed phone number is
//! confirmed; otherwise the author is reminded to check the details.

use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::patterns::contact::find_phone_number;
use crate::rules::results::{Finding, Severity};

const FORMAT_OK: &str = "联系方式格式规范";
const VERIFY_CONTACT: &str = "检测到联系方式，请确保真实有效，避免被判定为垃圾营销。";

pub struct ContactRules;

impl RuleCategory for ContactRules {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ctx.config.is_rule_enabled("contact/format") {
            return findings;
        }

        // Checked against the raw body, the title is not scanned
        let mentions_contact = ctx
            .lexicon
            .contact_keywords
            .iter()
            .any(|kw| ctx.content.contains(kw.as_str()));
        if !mentions_contact {
            return findings;
        }

        match find_phone_number(ctx.content) {
            Some(pattern) => findings.push(
                Finding::new("CON001", "contact", Severity::Safe, FORMAT_OK)
                    .with_matched(pattern),
            ),
            None => findings.push(Finding::new(
                "CON001",
                "contact",
                Severity::Suggestion,
                VERIFY_CONTACT,
            )),
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::draft::Draft;
    use crate::lexicon::Lexicon;
    use crate::platform::PlatformFlags;
    use pretty_assertions::assert_eq;

    fn run(title: &str, content: &str) -> Vec<Finding> {
        let draft = Draft::new(title, content, "");
        let config = Config::default();
        let lexicon = Lexicon::embedded();
        let ctx = AuditContext::new(&draft, PlatformFlags::default(), &lexicon, &config);
        ContactRules.run(&ctx)
    }

    #[test]
    fn test_hotline_format_is_safe() {
        let findings = run("", "<p>咨询电话：400-123-4567</p>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Safe);
        assert_eq!(findings[0].message, FORMAT_OK);
    }

    #[test]
    fn test_mobile_number_is_safe() {
        let findings = run("", "手机：13800138000");
        assert_eq!(findings[0].severity, Severity::Safe);
    }

    #[test]
    fn test_contact_without_number_suggests_check() {
        let findings = run("", "加微信了解详情");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Suggestion);
        assert_eq!(findings[0].message, VERIFY_CONTACT);
    }

    #[test]
    fn test_title_is_not_scanned() {
        assert!(run("客服电话", "正文").is_empty());
    }

    #[test]
    fn test_no_contact_keyword_is_silent() {
        assert!(run("", "13800138000").is_empty());
    }
}
