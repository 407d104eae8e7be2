use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "localgroup.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// JSON layout of the exported files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JsonStyle {
    /// Two-space indented
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Layered configuration for the catalog builder
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub output_dir: ConfigValue<PathBuf>,
    pub galaxies_file: ConfigValue<String>,
    pub metadata_file: ConfigValue<String>,
    pub json_style: ConfigValue<JsonStyle>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            output_dir: ConfigValue::new(PathBuf::from("public/data"), ConfigSource::Default),
            galaxies_file: ConfigValue::new("galaxies.json".to_string(), ConfigSource::Default),
            metadata_file: ConfigValue::new("metadata.json".to_string(), ConfigSource::Default),
            json_style: ConfigValue::new(JsonStyle::Pretty, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file {}: {}", path.as_ref().display(), e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CatalogError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(output_dir) = file_config.output_dir {
            self.output_dir.update(output_dir, ConfigSource::File);
        }

        if let Some(galaxies_file) = file_config.galaxies_file {
            validate_file_name("galaxies_file", &galaxies_file)?;
            self.galaxies_file.update(galaxies_file, ConfigSource::File);
        }

        if let Some(metadata_file) = file_config.metadata_file {
            validate_file_name("metadata_file", &metadata_file)?;
            self.metadata_file.update(metadata_file, ConfigSource::File);
        }

        if let Some(json_style) = file_config.json_style {
            self.json_style.update(json_style, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load `localgroup.toml` from `dir` when it exists
    pub fn load_from_dir_if_present<P: AsRef<Path>>(self, dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            self.load_from_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // LOCALGROUP_OUTPUT_DIR
        if let Ok(dir) = env::var("LOCALGROUP_OUTPUT_DIR") {
            if dir.trim().is_empty() {
                tracing::warn!("Ignoring empty LOCALGROUP_OUTPUT_DIR");
            } else {
                self.output_dir.update(PathBuf::from(dir), ConfigSource::Environment);
            }
        }

        // LOCALGROUP_GALAXIES_FILE
        if let Ok(name) = env::var("LOCALGROUP_GALAXIES_FILE") {
            match validate_file_name("galaxies_file", &name) {
                Ok(()) => self.galaxies_file.update(name, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LOCALGROUP_GALAXIES_FILE value '{}': expected a plain file name",
                    name
                ),
            }
        }

        // LOCALGROUP_METADATA_FILE
        if let Ok(name) = env::var("LOCALGROUP_METADATA_FILE") {
            match validate_file_name("metadata_file", &name) {
                Ok(()) => self.metadata_file.update(name, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LOCALGROUP_METADATA_FILE value '{}': expected a plain file name",
                    name
                ),
            }
        }

        // LOCALGROUP_JSON_STYLE
        if let Ok(style_str) = env::var("LOCALGROUP_JSON_STYLE") {
            match parse_json_style(&style_str) {
                Ok(style) => self.json_style.update(style, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LOCALGROUP_JSON_STYLE value '{}': expected pretty or compact",
                    style_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir.update(output_dir, ConfigSource::Cli);
        }

        if let Some(galaxies_file) = overrides.galaxies_file {
            validate_file_name("galaxies_file", &galaxies_file)?;
            self.galaxies_file.update(galaxies_file, ConfigSource::Cli);
        }

        if let Some(metadata_file) = overrides.metadata_file {
            validate_file_name("metadata_file", &metadata_file)?;
            self.metadata_file.update(metadata_file, ConfigSource::Cli);
        }

        if let Some(json_style) = overrides.json_style {
            self.json_style.update(json_style, ConfigSource::Cli);
        }

        Ok(())
    }

    /// Full path of the galaxy list
    pub fn galaxies_path(&self) -> PathBuf {
        self.output_dir.value.join(&self.galaxies_file.value)
    }

    /// Full path of the metadata record
    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.value.join(&self.metadata_file.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "output_dir".to_string(),
            (self.output_dir.value.display().to_string(), self.output_dir.source),
        );

        map.insert(
            "galaxies_file".to_string(),
            (self.galaxies_file.value.clone(), self.galaxies_file.source),
        );

        map.insert(
            "metadata_file".to_string(),
            (self.metadata_file.value.clone(), self.metadata_file.source),
        );

        map.insert(
            "json_style".to_string(),
            (format!("{:?}", self.json_style.value), self.json_style.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    output_dir: Option<PathBuf>,
    galaxies_file: Option<String>,
    metadata_file: Option<String>,
    json_style: Option<JsonStyle>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub galaxies_file: Option<String>,
    pub metadata_file: Option<String>,
    pub json_style: Option<JsonStyle>,
}

/// Parse JSON style from string
pub fn parse_json_style(s: &str) -> Result<JsonStyle> {
    match s.to_lowercase().as_str() {
        "pretty" => Ok(JsonStyle::Pretty),
        "compact" => Ok(JsonStyle::Compact),
        _ => Err(CatalogError::ConfigInvalid {
            key: "json_style".to_string(),
            reason: format!("Invalid JSON style: {}. Use pretty or compact", s),
        }),
    }
}

/// Output file names must be a single, non-empty path component
fn validate_file_name(key: &str, name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == "..";
    if invalid {
        return Err(CatalogError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("'{}' is not a plain file name", name),
        });
    }
    Ok(())
}
