//! Catalog metadata record

use chrono::NaiveDate;
use localgroup_core::models::{GalaxyRecord, Metadata, SourceEntry};

pub const METADATA_VERSION: &str = "1.0";

/// Table size as originally published; replaced by the assembled count
const PUBLISHED_GALAXY_COUNT: usize = 42;

/// Fixed creation date of the dataset
pub fn created_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 21).unwrap_or_default()
}

/// The static descriptive record, with the published galaxy count
pub fn static_metadata() -> Metadata {
    Metadata {
        version: METADATA_VERSION.to_string(),
        created: created_date(),
        galaxy_count: PUBLISHED_GALAXY_COUNT,
        sources: vec![
            SourceEntry::new(
                "Caltech NED Local Group Database",
                "Primary source for Local Group galaxy catalog",
            )
            .with_url("https://ned.ipac.caltech.edu/level5/Mateo/table1.html"),
            SourceEntry::new(
                "McConnachie 2012",
                "The Observed Properties of Dwarf Galaxies in and around the Local Group",
            )
            .with_citation("McConnachie, A. W. 2012, AJ, 144, 4"),
            SourceEntry::new("NASA Extragalactic Database", "Distance measurements and photometry")
                .with_url("https://ned.ipac.caltech.edu/"),
        ],
        coordinate_system: "Equatorial J2000.0, converted to Cartesian (kpc)".to_string(),
        notes: "Distances in kiloparsecs (kpc). 1 kpc = 3,260.47 light-years".to_string(),
    }
}

/// Metadata describing `galaxies`, with the count taken from the slice
pub fn build_metadata(galaxies: &[GalaxyRecord]) -> Metadata {
    static_metadata().with_galaxy_count(galaxies.len())
}
