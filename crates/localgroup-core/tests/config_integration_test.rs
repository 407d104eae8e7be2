//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use localgroup_core::config::{CliConfigOverrides, ConfigSource, JsonStyle, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 4] = [
    "LOCALGROUP_OUTPUT_DIR",
    "LOCALGROUP_GALAXIES_FILE",
    "LOCALGROUP_METADATA_FILE",
    "LOCALGROUP_JSON_STYLE",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_partial_file_configuration() {
    let file = config_file(
        r#"
output_dir = "dist/data"
# Only override the directory, leave the rest as defaults
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.output_dir.value, PathBuf::from("dist/data"));
    assert_eq!(config.output_dir.source, ConfigSource::File);
    assert_eq!(config.galaxies_file.value, "galaxies.json");
    assert_eq!(config.galaxies_file.source, ConfigSource::Default);
    assert_eq!(config.json_style.source, ConfigSource::Default);
}

#[test]
fn test_missing_file_is_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/localgroup.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("LOCALGROUP_OUTPUT_DIR", "/tmp/from-env");
    env::set_var("LOCALGROUP_JSON_STYLE", "compact");

    let file = config_file(
        r#"
output_dir = "from-file"
json_style = "Pretty"
galaxies_file = "file-galaxies.json"
"#,
    );

    let config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.output_dir.value, PathBuf::from("/tmp/from-env"));
    assert_eq!(config.output_dir.source, ConfigSource::Environment);
    assert_eq!(config.json_style.value, JsonStyle::Compact);
    assert_eq!(config.json_style.source, ConfigSource::Environment);
    // Not set in the environment, so the file wins
    assert_eq!(config.galaxies_file.value, "file-galaxies.json");
    assert_eq!(config.galaxies_file.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("LOCALGROUP_JSON_STYLE", "sideways");
    env::set_var("LOCALGROUP_GALAXIES_FILE", "nested/galaxies.json");
    env::set_var("LOCALGROUP_OUTPUT_DIR", "   ");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.json_style.value, JsonStyle::Pretty);
    assert_eq!(config.json_style.source, ConfigSource::Default);
    assert_eq!(config.galaxies_file.value, "galaxies.json");
    assert_eq!(config.output_dir.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    env::set_var("LOCALGROUP_METADATA_FILE", "env-meta.json");

    let file = config_file(r#"metadata_file = "file-meta.json""#);

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();
    config
        .update_from_cli(CliConfigOverrides {
            metadata_file: Some("cli-meta.json".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(config.metadata_file.value, "cli-meta.json");
    assert_eq!(config.metadata_file.source, ConfigSource::Cli);
    assert_eq!(config.metadata_path(), PathBuf::from("public/data/cli-meta.json"));

    clear_env();
}
