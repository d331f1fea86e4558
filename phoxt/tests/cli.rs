//! End-to-end tests for the phoxt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn phoxt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phoxt").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PHOXT_VERBOSE")
        .env_remove("PHOXT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    phoxt(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("strings"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_tokens_text() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php $a;");
    phoxt(&dir)
        .args(["tokens", "a.php"])
        .assert()
        .success()
        .stdout("1:1 T_OPEN_TAG \"<?php \"\n1:7 T_VARIABLE \"$a\"\n1:9 T_CHAR \";\"\n");
}

#[test]
fn test_tokens_json() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php 1.5;");
    let output = phoxt(&dir)
        .args(["tokens", "a.php", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[1]["kind"], "T_DNUMBER");
    assert_eq!(value[1]["text"], "1.5");
    assert_eq!(value[1]["start"], 6);
}

#[test]
fn test_tokens_format_from_config() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php");
    write(&dir, "phoxt.toml", "[output]\nformat = \"json\"\n");
    phoxt(&dir)
        .args(["tokens", "a.php"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"T_OPEN_TAG\""));
}

#[test]
fn test_tokens_missing_file() {
    let dir = TempDir::new().unwrap();
    phoxt(&dir)
        .args(["tokens", "missing.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path does not exist"));
}

#[test]
fn test_strings() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php\necho 'x', \"hi $name\\n\";\n");
    phoxt(&dir)
        .args(["strings", "a.php"])
        .assert()
        .success()
        .stdout("a.php:2:6: \"x\"\na.php:2:11: concat(\"hi \", $name, \"\\n\")\n");
}

#[test]
fn test_check_clean_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php echo 'a';");
    write(&dir, "b.php", "<html><?= \"$b\" ?></html>");
    phoxt(&dir)
        .args(["check", "a.php", "b.php", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) checked, no problems found"));
}

#[test]
fn test_check_reports_problems() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.php", "<?php 'a';");
    write(&dir, "bad.php", "<?php\n$s = \"open");
    phoxt(&dir)
        .args(["check", "good.php", "bad.php"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.php:2:6: unexpected end of input"))
        .stdout(predicate::str::contains("  2 | $s = \"open\n    |      ^\n"))
        .stderr(predicate::str::contains("1 file(s) have problems"));
}

#[test]
fn test_strings_underlines_unterminated_literal() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php echo 'x', 'oops");
    phoxt(&dir)
        .args(["strings", "a.php"])
        .assert()
        .success()
        .stdout(
            "a.php:1:12: \"x\"\n\
             a.php:1:17: error: malformed string literal at 1:17\n\
             --> a.php:1:17\n\
             \x20 1 | <?php echo 'x', 'oops\n\
             \x20   |                 ^^^^^\n",
        );
}

#[test]
fn test_bad_config_is_reported() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.php", "<?php");
    write(&dir, "broken.toml", "[lexer\n");
    phoxt(&dir)
        .args(["--config", "broken.toml", "tokens", "a.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load configuration"));
}
