use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn calc_cli() -> Command {
    let mut cmd = Command::cargo_bin("calc_cli").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn calculate_preset_text() {
    calc_cli()
        .args(["calculate", "--preset", "distribution-500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRANSFORMER CALCULATION RESULTS"))
        .stdout(predicate::str::contains("step-down"))
        .stdout(predicate::str::contains("Protective device: 1000 A"))
        .stdout(predicate::str::contains("STATUS: Compliant"));
}

#[test]
fn calculate_preset_json() {
    let output = calc_cli()
        .args(["calculate", "--preset", "site-110v", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let current = value["result"]["secondary_rated_current"].as_f64().unwrap();
    assert!((current - 45.45).abs() < 0.01);
    assert_eq!(value["compliance"]["protective_device"]["amps"], 63);
}

#[test]
fn flags_override_preset() {
    calc_cli()
        .args([
            "calculate",
            "--preset",
            "distribution-500",
            "--altitude",
            "2000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"altitude_derating\""))
        .stdout(predicate::str::contains("\"status\": \"caution\""));
}

#[test]
fn calculate_from_flags() {
    calc_cli()
        .args([
            "calculate",
            "--primary-voltage",
            "400",
            "--secondary-voltage",
            "11000",
            "--kva",
            "1000",
            "--power-factor",
            "0.9",
            "--phase",
            "3",
            "--impedance",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("step-up"));
}

#[test]
fn calculate_from_input_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unit.json");
    fs::write(
        &path,
        r#"{
            "primary_voltage": 230,
            "secondary_voltage": 230,
            "kva_rating": 10,
            "power_factor": 0.95,
            "phase": "single",
            "percent_impedance": 4,
            "connection_type": "Ii0"
        }"#,
    )
    .unwrap();

    calc_cli()
        .args(["calculate", "--input", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("isolation"))
        .stdout(predicate::str::contains("BS 7671 Section 413"));
}

#[test]
fn invalid_flag_value_reports_field() {
    calc_cli()
        .args(["calculate", "--power-factor", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("power_factor"))
        .stderr(predicate::str::contains("INVALID_INPUT").or(predicate::str::contains("InvalidInput")));
}

#[test]
fn unknown_preset_fails() {
    calc_cli()
        .args(["calculate", "--preset", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn config_sets_format_and_site() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calc.toml");
    fs::write(&path, "format = \"json\"\n[site]\nambient_temp = 50.0\n").unwrap();

    calc_cli()
        .args(["--config", path.to_str().unwrap(), "calculate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"temperature_derating\""));
}

#[test]
fn bad_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calc.toml");
    fs::write(&path, "unknown_key = 1\n").unwrap();

    calc_cli()
        .args(["--config", path.to_str().unwrap(), "presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn presets_lists_names() {
    calc_cli()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("distribution-1000"))
        .stdout(predicate::str::contains("Dyn11"))
        .stdout(predicate::str::contains("11 kV"));
}

#[test]
fn equations_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("EQUATIONS.md");

    calc_cli()
        .args(["equations", "--output", path.to_str().unwrap()])
        .assert()
        .success();

    let markdown = fs::read_to_string(&path).unwrap();
    assert!(markdown.starts_with("# Transformer Equations Reference"));
}

#[test]
fn rating_without_impedance_uses_typical_value() {
    let output = calc_cli()
        .args(["calculate", "--kva", "1000", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["input"]["percent_impedance"].as_f64(), Some(5.0));
}

#[test]
fn explicit_impedance_is_kept() {
    let output = calc_cli()
        .args(["calculate", "--kva", "1000", "--impedance", "7.5", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["input"]["percent_impedance"].as_f64(), Some(7.5));
}
