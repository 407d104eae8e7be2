use super::load_catalog;
use crate::cli::{ListArgs, SortKey};
use crate::output::OutputWriter;
use crate::output_types::GalaxyRow;
use anyhow::Result;
use localgroup_core::models::GalaxyRecord;

pub fn execute(args: ListArgs, output: &OutputWriter) -> Result<()> {
    let catalog = load_catalog()?;

    let mut galaxies: Vec<&GalaxyRecord> = match &args.galaxy_type {
        Some(code) => catalog.by_type(code),
        None => catalog.galaxies().iter().collect(),
    };

    match args.sort {
        Some(SortKey::Name) => galaxies.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::Distance) => {
            galaxies.sort_by(|a, b| a.distance_kpc.total_cmp(&b.distance_kpc))
        }
        None => {}
    }

    if !output.is_json() {
        match &args.galaxy_type {
            Some(code) => output.section(format!("{} galaxies of type {}", galaxies.len(), code)),
            None => output.section(format!("{} galaxies", galaxies.len())),
        }
    }

    output.table(galaxies.into_iter().map(GalaxyRow::from).collect())
}
