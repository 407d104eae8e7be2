//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use localgroup_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::Path;

/// Load layered configuration: defaults, then the config file, then the
/// environment, then CLI overrides.
///
/// An explicit `--config` path must exist; otherwise `localgroup.toml` in the
/// working directory is used when present.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let config = match config_path {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read the working directory")?;
            LayeredConfig::with_defaults()
                .load_from_dir_if_present(&cwd)
                .context("Failed to load localgroup.toml")?
        }
    };

    let mut config = config.load_from_env();
    config.update_from_cli(overrides).context("Invalid command-line option")?;

    tracing::debug!(
        galaxies = %config.galaxies_path().display(),
        metadata = %config.metadata_path().display(),
        "Configuration loaded"
    );

    Ok(config)
}
