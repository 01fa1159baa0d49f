//! Integration tests for the ContentGuard CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running inside `dir`, isolated from any user configuration
#[allow(deprecated)]
fn get_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contentguard").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("CONTENTGUARD_LEXICON")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_audit_clean_draft_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "标题", "--content", "普通正文内容"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("未检测到明显违规词汇"));
}

#[test]
fn test_audit_violation_exit_code_and_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = get_cmd(&temp_dir)
        .args([
            "audit",
            "--title",
            "比特币行情",
            "--content",
            "<p>稳赚不赔</p>",
            "--platform",
            "百家号 - 财经号",
            "--format",
            "json",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let kinds: Vec<_> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["type"].as_str().unwrap().to_string())
        .collect();
    assert!(kinds.contains(&"绝对违禁词".to_string()));
    assert!(kinds.contains(&"平台高压线".to_string()));
    assert!(json["safeItems"].is_array());
}

#[test]
fn test_audit_reads_content_file_and_writes_markdown() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("draft.html"),
        "<p>预期收益较高</p>\n<p>投资有风险，入市需谨慎</p>",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args([
            "audit",
            "--title",
            "周报",
            "--content-file",
            "draft.html",
            "--format",
            "markdown",
            "--output",
            "report.md",
        ])
        .assert()
        .code(0);

    let report = fs::read_to_string(temp_dir.path().join("report.md")).unwrap();
    assert!(report.contains("# Content Compliance Report"));
    assert!(report.contains("已包含合规风险提示"));
}

#[test]
fn test_audit_missing_content_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--content-file", "missing.html"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.html"));
}

#[test]
fn test_audit_only_with_invalid_categories() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "稳赚", "--only", "nonsense"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_audit_skip_category() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "稳赚", "--skip", "absolute"])
        .assert()
        .code(0);
}

#[test]
fn test_batch_json_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tasks.json"),
        r#"[
            {"id": "t1", "title": "稳赚秘籍", "content": "", "platform": "百家号"},
            {"title": "标题", "content": "普通正文内容", "platform": "微信服务号"}
        ]"#,
    )
    .unwrap();

    let output = get_cmd(&temp_dir)
        .args(["batch", "tasks.json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json[0]["id"], "t1");
    assert_eq!(json[0]["report"]["violations"][0]["type"], "绝对违禁词");
    assert_eq!(json[1]["id"], "#2");
    assert!(json[1]["report"]["violations"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn test_batch_malformed_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tasks.json"), "{not json").unwrap();

    get_cmd(&temp_dir)
        .args(["batch", "tasks.json"])
        .assert()
        .code(3);
}

#[test]
fn test_batch_only_with_invalid_categories() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tasks.json"),
        r#"[{"title": "稳赚", "content": null, "platform": null}]"#,
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["batch", "tasks.json", "--only", "nonsense"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No valid category left in --only"));
}

#[test]
fn test_lexicon_embedded_output() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["lexicon", "--embedded"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[crypto]"))
        .stdout(predicate::str::contains("稳赚不赔"));
}

#[test]
fn test_custom_lexicon_changes_results() {
    let temp_dir = TempDir::new().unwrap();

    // Export, then extend the extreme category with a new phrase
    get_cmd(&temp_dir)
        .args(["lexicon", "--embedded", "--output", "lexicon.toml"])
        .assert()
        .success();
    let path = temp_dir.path().join("lexicon.toml");
    let lexicon = fs::read_to_string(&path)
        .unwrap()
        .replace("\"绝无仅有\",", "\"绝无仅有\", \"无与伦比\",");
    fs::write(&path, lexicon).unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "无与伦比", "--lexicon", "lexicon.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("无与伦比"));

    get_cmd(&temp_dir)
        .args(["audit", "--title", "无与伦比"])
        .assert()
        .code(0);
}

#[test]
fn test_invalid_lexicon_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.toml"), "absolute = 3").unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "t", "--lexicon", "bad.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("bad.toml"));
}

#[test]
fn test_init_then_audit_uses_default_platform() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args([
            "init",
            "--platform",
            "百家号 - 财经号",
            "--non-interactive",
        ])
        .assert()
        .success();
    assert!(temp_dir.path().join(".contentguard.toml").exists());

    // 31-character title is only a violation on 百家号
    get_cmd(&temp_dir)
        .args(["audit", "--title", &"标".repeat(31)])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("标题规范"));

    get_cmd(&temp_dir)
        .args(["init", "--non-interactive"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_disables_rule() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".contentguard.toml"),
        "[rules.\"lexicon/absolute\"]\nenabled = false\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["audit", "--title", "稳赚"])
        .assert()
        .code(0);
}

#[test]
fn test_help_lists_commands() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("lexicon"));
}
