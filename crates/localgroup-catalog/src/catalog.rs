//! The assembled catalog and lookups over it

use crate::assemble::assemble_catalog;
use crate::data::{GalaxyEntry, LOCAL_GROUP};
use crate::metadata::build_metadata;
use crate::stats::{compute_stats, CatalogStats};
use localgroup_core::error::{CatalogError, Result};
use localgroup_core::models::{GalaxyRecord, Metadata};

/// Galaxy records together with the metadata describing them
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    galaxies: Vec<GalaxyRecord>,
    metadata: Metadata,
}

impl Catalog {
    /// Build the catalog from the built-in Local Group table
    pub fn local_group() -> Result<Self> {
        Self::from_entries(LOCAL_GROUP)
    }

    /// Build a catalog from an arbitrary table
    pub fn from_entries(entries: &[GalaxyEntry]) -> Result<Self> {
        let galaxies = assemble_catalog(entries)?;
        let metadata = build_metadata(&galaxies);
        tracing::info!(galaxy_count = galaxies.len(), "Catalog assembled");
        Ok(Self { galaxies, metadata })
    }

    pub fn galaxies(&self) -> &[GalaxyRecord] {
        &self.galaxies
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.galaxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galaxies.is_empty()
    }

    /// Find a galaxy by id, name, or alternate name (case-insensitive)
    pub fn find(&self, query: &str) -> Option<&GalaxyRecord> {
        self.galaxies.iter().find(|g| g.matches(query))
    }

    /// Like [`Catalog::find`], but a miss is an error
    pub fn get(&self, query: &str) -> Result<&GalaxyRecord> {
        self.find(query)
            .ok_or_else(|| CatalogError::GalaxyNotFound { query: query.to_string() })
    }

    /// Galaxies whose name, alternate names, or type contain `text`
    pub fn search(&self, text: &str) -> Vec<&GalaxyRecord> {
        self.galaxies.iter().filter(|g| g.mentions(text)).collect()
    }

    /// Galaxies with exactly the given morphological type (case-insensitive)
    pub fn by_type(&self, morphological_type: &str) -> Vec<&GalaxyRecord> {
        self.galaxies
            .iter()
            .filter(|g| g.morphological_type.eq_ignore_ascii_case(morphological_type))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        compute_stats(&self.galaxies)
    }
}
