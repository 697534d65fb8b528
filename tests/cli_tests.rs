//! CLI integration tests.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn arbcalc() -> Command {
    cargo_bin_cmd!("arbcalc")
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    write!(file, "{}", contents).expect("write temp config");
    file
}

#[test]
fn test_help() {
    arbcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assess"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("curve"));
}

#[test]
fn test_evaluate_prints_stake_table() {
    arbcalc()
        .args(["evaluate", "--odds1", "2.0", "--odds2", "3.0", "--budget", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arbitrage opportunity found!"))
        .stdout(predicate::str::contains("60.00"))
        .stdout(predicate::str::contains("40.00"))
        .stdout(predicate::str::contains("Payout:             £120.00"))
        .stdout(predicate::str::contains("Guaranteed profit:  £60.00"));
}

#[test]
fn test_evaluate_uneven_odds() {
    arbcalc()
        .args(["evaluate", "--odds1", "1.90", "--odds2", "2.20", "--budget", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("53.66"))
        .stdout(predicate::str::contains("46.34"));
}

#[test]
fn test_evaluate_no_opportunity_is_not_an_error() {
    arbcalc()
        .args(["evaluate", "--odds1", "1.50", "--odds2", "1.50", "--budget", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No arbitrage opportunity exists with these odds.",
        ))
        .stdout(predicate::str::contains("Bet 1").not());
}

#[test]
fn test_evaluate_json() {
    let output = arbcalc()
        .args([
            "evaluate", "--odds1", "2.0", "--odds2", "3.0", "--budget", "100", "--format", "json",
        ])
        .output()
        .expect("run arbcalc");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(v["payout"], "120.00");
    assert_eq!(v["guaranteed_profit"], "60.00");
    assert_eq!(v["bets"][1]["stake"], "40.00");
}

#[test]
fn test_evaluate_rejects_low_odds() {
    arbcalc()
        .args(["evaluate", "--odds1", "1.00", "--odds2", "3.0", "--budget", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum of 1.01"));
}

#[test]
fn test_evaluate_rejects_zero_budget() {
    arbcalc()
        .args(["evaluate", "--odds1", "2.0", "--odds2", "3.0", "--budget", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("budget 0 is below the minimum"));
}

#[test]
fn test_evaluate_rejects_huge_budget() {
    arbcalc()
        .args([
            "evaluate", "--odds1", "2.0", "--odds2", "3.0", "--budget",
            "70000000000000000000000000000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above the maximum"));
}

#[test]
fn test_curve_rejects_too_many_points() {
    arbcalc()
        .args(["curve", "--odds1", "2.0", "--points", "10001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("points must not exceed"));
}

#[test]
fn test_rejects_unknown_log_level() {
    arbcalc()
        .args(["--log-level", "bogus", "assess", "--odds1", "2.0", "--odds2", "3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_assess_break_even() {
    arbcalc()
        .args(["assess", "--odds1", "2.0", "--odds2", "2.0", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_risk_free\": false"));
}

#[test]
fn test_curve() {
    arbcalc()
        .args(["curve", "--odds1", "2.0", "--max-odds", "3.5", "--points", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Break-even odds: 2.0000"))
        .stdout(predicate::str::contains("3.50"));
}

#[test]
fn test_custom_config_currency() {
    let config = write_config(
        r#"
app:
  name: test
  log_level: error

calculator:
  currency: "$"
"#,
    );

    arbcalc()
        .args(["evaluate", "--odds1", "2.0", "--odds2", "3.0", "--budget", "100"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("$60.00"));
}

#[test]
fn test_custom_config_min_odds() {
    let config = write_config(
        r#"
app:
  name: test
  log_level: error

calculator:
  min_odds: "1.50"
"#,
    );

    arbcalc()
        .args(["assess", "--odds1", "1.40", "--odds2", "5.0"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum of 1.50"));
}

#[test]
fn test_invalid_config_fails() {
    let config = write_config(
        r#"
app:
  name: test

calculator:
  min_odds: "0.90"
"#,
    );

    arbcalc()
        .args(["assess", "--odds1", "2.0", "--odds2", "3.0"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
