//! Audit command - Audit a single draft
//!
//! This module implements the `audit` command which reads one draft from the
//! command line or a file, runs the rules engine and renders the report.

use colored::Colorize;
use tracing::info;

use super::{load_engine, write_output, AuditArgs, OutputFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, MarkdownReport, ReportRenderer, TerminalOutput};
use crate::cli::GlobalOptions;
use crate::draft::Draft;
use crate::error::{ContentGuardError, InputError};
use crate::rules::constants::filter_valid_categories;

/// Execute the audit command
///
/// # Returns
///
/// An exit code: 0 when no violation was found, 1 otherwise, 4 when every
/// requested category was invalid
///
/// # Errors
///
/// Returns an error if the configuration, lexicon or draft cannot be read, or
/// the report cannot be written
pub fn execute(args: AuditArgs, options: &GlobalOptions) -> Result<i32, ContentGuardError> {
    let mut engine = load_engine(options)?;

    if let Some(only) = args.only {
        let valid = filter_valid_categories(only);
        if valid.is_empty() {
            eprintln!("{} No valid category left in --only", "Error:".red().bold());
            return Ok(exit_codes::INVALID_ARGS);
        }
        engine.set_only_categories(valid);
    }
    if let Some(skip) = args.skip {
        engine.set_skip_categories(filter_valid_categories(skip));
    }

    let content = match (&args.content, &args.content_file) {
        (Some(content), _) => content.clone(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
            ContentGuardError::Input(InputError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?,
        (None, None) => String::new(),
    };

    let platform = args
        .platform
        .or_else(|| engine.config().default_platform.clone())
        .unwrap_or_default();

    let draft = Draft::new(args.title, content, platform);
    let report = engine.audit(&draft);
    info!(
        violations = report.violations().count(),
        platform = %draft.platform,
        "Draft audited"
    );

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new(args.detailed)),
        OutputFormat::Markdown => Box::new(MarkdownReport::new()),
    };
    let rendered = renderer.render_report(&report)?;
    write_output(args.output.as_deref(), &rendered)?;

    Ok(if report.has_violations() {
        exit_codes::VIOLATIONS
    } else {
        exit_codes::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(title: &str, content: &str, platform: &str, output: std::path::PathBuf) -> AuditArgs {
        AuditArgs {
            title: title.to_string(),
            content: Some(content.to_string()),
            content_file: None,
            platform: Some(platform.to_string()),
            format: OutputFormat::Json,
            detailed: false,
            only: None,
            skip: None,
            output: Some(output),
        }
    }

    fn options(temp_dir: &TempDir) -> GlobalOptions {
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();
        GlobalOptions {
            config: Some(config_path),
            lexicon: None,
        }
    }

    #[test]
    fn test_execute_with_violation() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        let code = execute(
            args("稳赚不赔", "", "百家号", output.clone()),
            &options(&temp_dir),
        )
        .unwrap();

        assert_eq!(code, exit_codes::VIOLATIONS);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["violations"][0]["type"], "绝对违禁词");
    }

    #[test]
    fn test_execute_clean_draft() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        let code = execute(args("标题", "普通正文内容", "", output), &options(&temp_dir)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_execute_reads_content_file() {
        let temp_dir = TempDir::new().unwrap();
        let draft_path = temp_dir.path().join("draft.html");
        fs::write(&draft_path, "<p>内幕消息</p>").unwrap();

        let mut audit_args = args("", "", "", temp_dir.path().join("report.json"));
        audit_args.content = None;
        audit_args.content_file = Some(draft_path);

        let code = execute(audit_args, &options(&temp_dir)).unwrap();
        assert_eq!(code, exit_codes::VIOLATIONS);
    }

    #[test]
    fn test_execute_missing_content_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut audit_args = args("", "", "", temp_dir.path().join("report.json"));
        audit_args.content = None;
        audit_args.content_file = Some(temp_dir.path().join("missing.html"));

        let result = execute(audit_args, &options(&temp_dir));
        assert!(matches!(result, Err(ContentGuardError::Input(_))));
    }

    #[test]
    fn test_execute_invalid_only() {
        let temp_dir = TempDir::new().unwrap();
        let mut audit_args = args("最好", "", "", temp_dir.path().join("report.json"));
        audit_args.only = Some(vec!["nonsense".to_string()]);

        let code = execute(audit_args, &options(&temp_dir)).unwrap();
        assert_eq!(code, exit_codes::INVALID_ARGS);
    }

    #[test]
    fn test_execute_uses_default_platform() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "default_platform = \"百家号\"\n").unwrap();
        let output = temp_dir.path().join("report.json");

        let mut audit_args = args("比特币", "", "", output);
        audit_args.platform = None;
        let code = execute(
            audit_args,
            &GlobalOptions {
                config: Some(config_path),
                lexicon: None,
            },
        )
        .unwrap();
        assert_eq!(code, exit_codes::VIOLATIONS);
    }
}
