use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("buildstats"));
}

#[test]
fn classify_prints_family_colors() {
    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.args(["classify", "Fedora-40-x86_64", "custom-1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Fedora-40-x86_64\t#51A2DA"))
        .stdout(predicate::str::contains("custom-1\t#8B8D8F"));
}

#[test]
fn render_toggles_and_emits_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("chroots.json");
    let rows: Vec<(String, u32)> = (0..8).map(|i| (format!("fedora-{}-x86_64", 30 + i), i)).collect();
    fs::write(&input, serde_json::to_string(&rows).unwrap()).unwrap();
    let emitted = dir.path().join("config.json");

    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--limit", "3", "--toggles", "1"])
        .arg("--emit-config")
        .arg(&emitted);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote 8 bars"))
        .stderr(predicate::str::contains("Toggle: Show top 3"));

    assert!(dir.path().join("chroots.svg").exists());
    let cfg: serde_json::Value = serde_json::from_str(&fs::read_to_string(&emitted).unwrap()).unwrap();
    assert_eq!(cfg["data"]["values"].as_array().unwrap().len(), 8);
    assert_eq!(cfg["size"]["height"], 250);
}

#[test]
fn render_with_empty_dataset_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[]").unwrap();
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    let emitted = dir.path().join("chart.json");
    cmd.arg("render")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--emit-config")
        .arg(&emitted);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Empty dataset"))
        .stderr(predicate::str::contains("No chart rendered"));
    assert!(!out.join("chroots.svg").exists());
    assert!(!emitted.exists());
}
