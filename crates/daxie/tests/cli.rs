//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DAXIE_CURRENCY_EMPTY_FORMAT")
        .env_remove("DAXIE_CUT_ZERO");
    cmd
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("currency"));
}

#[test]
fn no_arguments_prints_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Number Command
// =============================================================================

#[test]
fn number_spells_each_value() {
    cmd()
        .args(["number", "1008", "10000800", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("壹仟零捌\n壹仟万零捌佰\n零点伍\n"));
}

#[test]
fn number_reads_stdin_when_no_values() {
    cmd()
        .arg("number")
        .write_stdin("12\n100000000\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("壹拾贰\n壹亿\n"));
}

#[test]
fn number_prints_sentinels_for_rejected_values() {
    cmd()
        .args(["number", "-1", "1000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::diff("数据错误\n超大数字\n"));
}

#[test]
fn number_strict_fails_on_rejected_value() {
    cmd()
        .args(["number", "--strict", "12", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("数据错误"))
        .stderr(predicate::str::contains("1 of 2 values rejected"));
}

#[test]
fn number_json_reports_outcomes() {
    let json = json_stdout(&["number", "--json", "20", "x"]);
    let reports = json.as_array().expect("JSON array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["text"], "贰拾");
    assert_eq!(reports[0]["mode"], "plain-numeral");
    assert_eq!(reports[0]["outcome"], "converted");
    assert_eq!(reports[1]["outcome"], "malformed");
}

// =============================================================================
// Currency Command
// =============================================================================

#[test]
fn currency_spells_amounts() {
    cmd()
        .args(["currency", "1.01", "0.1", "100"])
        .assert()
        .success()
        .stdout(predicate::str::diff("壹元零壹分\n壹角\n壹佰元整\n"));
}

#[test]
fn currency_blank_line_uses_empty_format() {
    cmd()
        .args(["currency", "--empty-format", "--"])
        .write_stdin("\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("--\n壹元整\n"));
}

#[test]
fn currency_rejects_large_amounts() {
    cmd()
        .args(["currency", "1000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::diff("超大金额\n"));
}

// =============================================================================
// Yuan & Fen Commands
// =============================================================================

#[test]
fn yuan_places_the_decimal_point() {
    cmd()
        .args(["yuan", "2", "2000", "-2000"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.02\n20.00\n-20.00\n"));
}

#[test]
fn yuan_cut_zero_trims() {
    cmd()
        .args(["yuan", "--cut-zero", "2000", "20"])
        .assert()
        .success()
        .stdout(predicate::str::diff("20\n0.2\n"));
}

#[test]
fn yuan_reports_bad_input_on_stderr() {
    cmd()
        .args(["yuan", "2e3"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\n"))
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn fen_shifts_two_places() {
    cmd()
        .args(["fen", "10.0201", "0.1", "-0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1002\n10\n-0\n"));
}

#[test]
fn fen_json_marks_rejections() {
    let json = json_stdout(&["fen", "--json", "10", "abc"]);
    assert_eq!(json[0]["output"], "1000");
    assert_eq!(json[0]["ok"], true);
    assert_eq!(json[1]["output"], "");
    assert_eq!(json[1]["ok"], false);
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_prints_true_on_match() {
    cmd()
        .args(["check", "money", "20.5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));
}

#[test]
fn check_fails_on_mismatch() {
    cmd()
        .args(["check", "integer", "020"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid integer"));
}

#[test]
fn check_accepts_negative_values() {
    cmd()
        .args(["check", "number", "-20"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));
}

#[test]
fn check_rejects_unknown_kind() {
    cmd()
        .args(["check", "phone", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let json = json_stdout(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn color_never_is_accepted() {
    cmd()
        .args(["--color", "never", "number", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("壹\n"));
}

#[test]
fn chdir_to_missing_directory_fails() {
    cmd()
        .args(["-C", "/definitely/not/here", "number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}
