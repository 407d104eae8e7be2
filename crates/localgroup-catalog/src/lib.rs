//! Local Group Catalog - Static table, record assembly, and export
//!
//! This crate turns the built-in literature table into [`GalaxyRecord`]s and a
//! [`Metadata`] record, and writes them out as JSON.
//!
//! [`GalaxyRecord`]: localgroup_core::models::GalaxyRecord
//! [`Metadata`]: localgroup_core::models::Metadata

pub mod assemble;
pub mod catalog;
pub mod data;
pub mod export;
pub mod metadata;
pub mod stats;

pub use assemble::{assemble_catalog, assemble_record};
pub use catalog::Catalog;
pub use data::{GalaxyEntry, LOCAL_GROUP};
pub use export::{export_catalog, render, ExportSummary, ExportTarget, RenderedCatalog};
pub use metadata::{build_metadata, static_metadata};
pub use stats::{compute_stats, CatalogStats, TypeCount};
