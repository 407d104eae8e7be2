//! Summary statistics over an assembled catalog

use localgroup_core::models::GalaxyRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of galaxies sharing a morphological type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub morphological_type: String,
    pub count: usize,
}

/// Catalog-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,

    /// Sorted by descending count, ties broken by type code
    pub by_type: Vec<TypeCount>,

    /// Nearest and farthest distance, excluding the zero-distance origin row
    pub distance_range_kpc: Option<(f64, f64)>,

    /// Mean distance, excluding the zero-distance origin row
    pub mean_distance_kpc: Option<f64>,
}

pub fn compute_stats(galaxies: &[GalaxyRecord]) -> CatalogStats {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for galaxy in galaxies {
        *counts.entry(galaxy.morphological_type.as_str()).or_default() += 1;
    }

    let mut by_type: Vec<TypeCount> = counts
        .into_iter()
        .map(|(code, count)| TypeCount { morphological_type: code.to_string(), count })
        .collect();
    by_type.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| a.morphological_type.cmp(&b.morphological_type))
    });

    let distances: Vec<f64> =
        galaxies.iter().map(|g| g.distance_kpc).filter(|d| *d > 0.0).collect();

    let distance_range_kpc = if distances.is_empty() {
        None
    } else {
        let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    };

    let mean_distance_kpc = if distances.is_empty() {
        None
    } else {
        Some(distances.iter().sum::<f64>() / distances.len() as f64)
    };

    CatalogStats { total: galaxies.len(), by_type, distance_range_kpc, mean_distance_kpc }
}
