//! Integration tests for the localgroup binary
//!
//! These tests verify file output, JSON output, and dry-run mode.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn localgroup(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_localgroup"))
        .current_dir(dir)
        .env_remove("LOCALGROUP_OUTPUT_DIR")
        .env_remove("LOCALGROUP_GALAXIES_FILE")
        .env_remove("LOCALGROUP_METADATA_FILE")
        .env_remove("LOCALGROUP_JSON_STYLE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_default_invocation_writes_both_files() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let galaxies_path = dir.path().join("public/data/galaxies.json");
    let metadata_path = dir.path().join("public/data/metadata.json");

    let galaxies: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&galaxies_path).unwrap()).unwrap();
    let metadata: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&metadata_path).unwrap()).unwrap();

    let count = galaxies.as_array().unwrap().len();
    assert_eq!(count, 43);
    assert_eq!(metadata["galaxy_count"], count);
    assert_eq!(galaxies[0]["id"], "milky_way");
}

#[test]
fn test_two_builds_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let galaxies_path = dir.path().join("public/data/galaxies.json");
    let metadata_path = dir.path().join("public/data/metadata.json");

    assert!(localgroup(dir.path(), &["build"]).status.success());
    let galaxies_first = fs::read(&galaxies_path).unwrap();
    let metadata_first = fs::read(&metadata_path).unwrap();

    assert!(localgroup(dir.path(), &["build"]).status.success());
    assert_eq!(fs::read(&galaxies_path).unwrap(), galaxies_first);
    assert_eq!(fs::read(&metadata_path).unwrap(), metadata_first);
}

#[test]
fn test_build_json_output_is_valid() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["build", "--output-dir", "out", "--compact", "--json"]);
    assert!(output.status.success());

    let parsed = stdout_json(&output);
    assert_eq!(parsed["status"], "success");
    let data = &parsed["data"];
    assert_eq!(data["galaxy_count"], 43);
    assert_eq!(data["json_style"], "Compact");
    assert_eq!(data["stats"]["total"], 43);

    let galaxies = fs::read_to_string(dir.path().join("out/galaxies.json")).unwrap();
    assert_eq!(galaxies.lines().count(), 1);
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("localgroup.toml"),
        "output_dir = \"site\"\ngalaxies_file = \"lg.json\"\n",
    )
    .unwrap();

    assert!(localgroup(dir.path(), &["build"]).status.success());
    assert!(dir.path().join("site/lg.json").is_file());
    assert!(dir.path().join("site/metadata.json").is_file());
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["build", "--config", "nope.toml"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["build", "--dry-run"]);
    assert!(output.status.success());
    assert!(!dir.path().join("public").exists(), "Dry-run should not create the output directory");
}

#[test]
fn test_dry_run_with_json_output() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["--dry-run", "--json"]);
    assert!(output.status.success());

    let parsed = stdout_json(&output);
    let data = parsed.get("data").expect("Should have data field");
    assert_eq!(data.get("dry_run").and_then(|v| v.as_bool()), Some(true));

    let actions = data["planned_actions"].as_array().unwrap();
    assert_eq!(actions[0]["action_type"], "create_directory");
    assert_eq!(actions.last().unwrap()["action_type"], "write_file");
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_dry_run_leaves_lookups_unchanged() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["stats", "--dry-run", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"]["total"], 43);
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_show_by_alternate_name() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["show", "m31", "--json"]);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["id"], "andromeda_m31");
    assert_eq!(data["distance_uncertainty_kpc"], 38.5);
    assert_eq!(data["ra_formatted"], "00:42:44");
    assert_eq!(data["dec_formatted"], "+41:16:09");
}

#[test]
fn test_show_unknown_galaxy_fails() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["show", "Alpha Centauri"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Galaxy not found"));
}

#[test]
fn test_list_filtered_by_type() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["list", "--type", "irr", "--sort", "distance", "--json"]);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["count"], 11);
    assert_eq!(data["rows"][0]["id"], "large_magellanic_cloud");
}

#[test]
fn test_distance_between_galaxies() {
    let dir = TempDir::new().unwrap();

    let args = ["distance", "Milky Way", "Andromeda (M31)", "--speed", "1", "--json"];
    let output = localgroup(dir.path(), &args);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    let kpc = data["distance_kpc"].as_f64().unwrap();
    assert!((kpc - 770.0).abs() < 0.01);
    assert_eq!(data["speed_fraction"], 1.0);
}

#[test]
fn test_invalid_speed_fails() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["distance", "M31", "M33", "--speed", "2"]);
    assert!(!output.status.success());
}

#[test]
fn test_route_totals_its_legs() {
    let dir = TempDir::new().unwrap();

    let output = localgroup(dir.path(), &["route", "LMC", "SMC", "M31", "--json"]);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    let legs = data["legs"].as_array().unwrap();
    assert_eq!(legs.len(), 2);
    let sum: f64 = legs.iter().map(|leg| leg["distance_kpc"].as_f64().unwrap()).sum();
    assert!((sum - data["total_distance_kpc"].as_f64().unwrap()).abs() < 1e-9);
}
