//! Record assembly: one [`GalaxyRecord`] per table row.

use crate::data::{GalaxyEntry, CITATION, SOURCE, SOURCE_URL};
use localgroup_core::error::{CatalogError, Result};
use localgroup_core::models::{
    distance_uncertainty, galaxy_id, EquatorialCoordinates, GalaxyRecord,
};
use localgroup_core::numeric::round_to;
use localgroup_geo::{equatorial_to_cartesian, parse_dec_degrees, parse_ra_degrees};
use std::collections::HashSet;

/// Decimal places kept on the decimal-degree coordinates
pub const DEGREE_DECIMALS: u32 = 6;

/// Parse, project and annotate a single table row
pub fn assemble_record(entry: &GalaxyEntry) -> Result<GalaxyRecord> {
    check_non_negative(entry.name, entry.distance_kpc)?;
    check_non_negative(entry.name, entry.size_estimate_kpc)?;

    let ra_deg = parse_ra_degrees(entry.ra)?;
    let dec_deg = parse_dec_degrees(entry.dec)?;
    let position_3d = equatorial_to_cartesian(ra_deg, dec_deg, entry.distance_kpc);

    Ok(GalaxyRecord {
        id: galaxy_id(entry.name),
        name: entry.name.to_string(),
        alternate_names: entry.alternate_names.iter().map(|s| s.to_string()).collect(),
        galaxy_type: entry.morphological_type.to_string(),
        coordinates: EquatorialCoordinates {
            ra: entry.ra.to_string(),
            dec: entry.dec.to_string(),
            ra_deg: round_to(ra_deg, DEGREE_DECIMALS),
            dec_deg: round_to(dec_deg, DEGREE_DECIMALS),
        },
        position_3d,
        distance_kpc: entry.distance_kpc,
        distance_uncertainty_kpc: distance_uncertainty(entry.distance_kpc),
        size_estimate_kpc: entry.size_estimate_kpc,
        morphological_type: entry.morphological_type.to_string(),
        notes: entry.notes.to_string(),
        source: SOURCE.to_string(),
        source_url: SOURCE_URL.to_string(),
        citation: CITATION.to_string(),
    })
}

/// Assemble every row in order. The first failing row aborts the whole
/// assembly; no partial catalog is returned.
pub fn assemble_catalog(entries: &[GalaxyEntry]) -> Result<Vec<GalaxyRecord>> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let record = assemble_record(entry)?;
        if !seen.insert(record.id.clone()) {
            return Err(CatalogError::DuplicateId { id: record.id });
        }
        tracing::debug!(
            id = %record.id,
            x = record.position_3d.x,
            y = record.position_3d.y,
            z = record.position_3d.z,
            "Assembled galaxy record"
        );
        records.push(record);
    }

    Ok(records)
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidDistance { name: name.to_string(), value });
    }
    Ok(())
}
