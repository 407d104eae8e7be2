//! JSON export of the galaxy list and metadata record.
//!
//! Both documents are serialized in memory before anything touches the
//! filesystem. Each file is then written to a sibling temporary file and
//! renamed into place, so a reader never observes a half-written document.

use crate::catalog::Catalog;
use localgroup_core::config::{JsonStyle, LayeredConfig};
use localgroup_core::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how to write the two documents
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTarget {
    pub galaxies_path: PathBuf,
    pub metadata_path: PathBuf,
    pub style: JsonStyle,
}

impl ExportTarget {
    pub fn from_config(config: &LayeredConfig) -> Self {
        Self {
            galaxies_path: config.galaxies_path(),
            metadata_path: config.metadata_path(),
            style: config.json_style.value,
        }
    }
}

/// Serialized documents, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCatalog {
    pub galaxies_json: String,
    pub metadata_json: String,
}

/// Result of a completed export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub galaxies_path: PathBuf,
    pub metadata_path: PathBuf,
    pub galaxy_count: usize,
    pub galaxies_bytes: usize,
    pub metadata_bytes: usize,
}

/// Serialize the catalog without writing anything
pub fn render(catalog: &Catalog, style: JsonStyle) -> Result<RenderedCatalog> {
    Ok(RenderedCatalog {
        galaxies_json: to_json(catalog.galaxies(), style)?,
        metadata_json: to_json(catalog.metadata(), style)?,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<String> {
    let json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
        JsonStyle::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

/// Render and write both documents
pub fn export_catalog(catalog: &Catalog, target: &ExportTarget) -> Result<ExportSummary> {
    let rendered = render(catalog, target.style)?;

    for path in [&target.galaxies_path, &target.metadata_path] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    write_replacing(&target.galaxies_path, &rendered.galaxies_json)?;
    write_replacing(&target.metadata_path, &rendered.metadata_json)?;

    tracing::info!(
        galaxies = %target.galaxies_path.display(),
        metadata = %target.metadata_path.display(),
        galaxy_count = catalog.len(),
        "Catalog exported"
    );

    Ok(ExportSummary {
        galaxies_path: target.galaxies_path.clone(),
        metadata_path: target.metadata_path.clone(),
        galaxy_count: catalog.len(),
        galaxies_bytes: rendered.galaxies_json.len(),
        metadata_bytes: rendered.metadata_json.len(),
    })
}

fn write_replacing(path: &Path, content: &str) -> Result<()> {
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
