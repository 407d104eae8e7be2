use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use localgroup_core::config::{CliConfigOverrides, ConfigValue};
use std::path::Path;

pub fn execute(output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, CliConfigOverrides::default())?;

    if output.is_json() {
        return output.result(ConfigOutput {
            output_dir: entry(&config.output_dir, config.output_dir.value.display().to_string()),
            galaxies_file: entry(&config.galaxies_file, config.galaxies_file.value.clone()),
            metadata_file: entry(&config.metadata_file, config.metadata_file.value.clone()),
            json_style: entry(&config.json_style, format!("{:?}", config.json_style.value)),
        });
    }

    output.section("Configuration");
    for (key, (value, source)) in config.to_inspection_map() {
        output.kv(key, format!("{} ({:?})", value, source));
    }
    output.section("Output files");
    output.kv("Galaxies", config.galaxies_path().display());
    output.kv("Metadata", config.metadata_path().display());

    Ok(())
}

fn entry<T>(value: &ConfigValue<T>, display: String) -> ConfigEntry {
    ConfigEntry { value: display, source: format!("{:?}", value.source) }
}
