#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::str::contains;

// Ambient CHISQ_* variables would override the defaults under test
fn chisq_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chisq-fit").unwrap();
    cmd.env_remove("CHISQ_OBSERVED")
        .env_remove("CHISQ_EXPECTED")
        .env_remove("CHISQ_ALPHA")
        .env_remove("CHISQ_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_example() {
    chisq_cmd()
        .assert()
        .success()
        .stdout(contains("Group 1: ((Observed - Expected)² / Expected) = ((50-60)² / 60) = 1.6667"))
        .stdout(contains("Group 4: ((Observed - Expected)² / Expected) = ((90-100)² / 100) = 1.0000"))
        .stdout(contains("Chi-Square Statistic = Σ((O-E)²/E) = 5.0043"))
        .stdout(contains("Degrees of Freedom = 4"))
        .stdout(contains("P-Value = 0.2869"))
        .stdout(contains("Fail to Reject Null Hypothesis (H₀)"));
}

#[test]
fn test_reject() {
    chisq_cmd()
        .args(["--observed", "10,90", "--expected", "50,50", "--alpha", "0.01"])
        .assert()
        .success()
        .stdout(contains("Significance Level (α) = 0.01"))
        .stdout(contains("Observed data does NOT fit the expected distribution."));
}

#[test]
fn test_env_configuration() {
    chisq_cmd()
        .env("CHISQ_OBSERVED", "10, 90")
        .env("CHISQ_EXPECTED", "50, 50")
        .assert()
        .success()
        .stdout(contains("Chi-Square Statistic = Σ((O-E)²/E) = 64.0000"));
}

#[test]
fn test_non_numeric() {
    chisq_cmd()
        .args(["--observed", "50,abc,120", "--expected", "60,70,110"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Please enter valid numeric values separated by commas"));
}

#[test]
fn test_length_mismatch() {
    chisq_cmd()
        .args(["--observed", "1,2,3", "--expected", "1,2"])
        .assert()
        .code(1)
        .stderr(contains("Observed and Expected values must have the same number of elements."));
}

#[test]
fn test_zero_expected() {
    chisq_cmd()
        .args(["--observed", "1,2,3", "--expected", "4,0,6"])
        .assert()
        .code(1)
        .stderr(contains("valid numeric values"));
}

#[test]
fn test_negative_observed() {
    chisq_cmd()
        .args(["--observed", "-1,2", "--expected", "1,2"])
        .assert()
        .code(1)
        .stderr(contains("valid numeric values"));
}

#[test]
fn test_alpha_outside_slider_range() {
    chisq_cmd()
        .args(["--alpha", "0.5"])
        .assert()
        .code(2)
        .stderr(contains("must be between 0.01 and 0.1"));
}

#[test]
fn test_json_output() {
    let output = chisq_cmd()
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(4, json["degrees_of_freedom"]);
    assert_eq!(false, json["reject_null"]);
    assert_eq!(5, json["contributions"].as_array().unwrap().len());
    let p_value = json["p_value"].as_f64().unwrap();
    assert!((p_value - 0.28685360065170423).abs() < 1e-9);
}
