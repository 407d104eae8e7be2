use super::load_catalog;
use crate::cli::ShowArgs;
use crate::output::OutputWriter;
use crate::output_types::ShowOutput;
use anyhow::Result;
use localgroup_geo::distance::{format_distance, kpc_to_light_years};
use localgroup_geo::{format_dec, format_ra};

pub fn execute(args: ShowArgs, output: &OutputWriter) -> Result<()> {
    let catalog = load_catalog()?;
    let galaxy = catalog.get(&args.query)?;

    let show = ShowOutput {
        galaxy: galaxy.clone(),
        distance_ly: kpc_to_light_years(galaxy.distance_kpc),
        ra_formatted: format_ra(galaxy.coordinates.ra_deg),
        dec_formatted: format_dec(galaxy.coordinates.dec_deg),
    };

    if output.is_json() {
        return output.result(show);
    }

    output.section(&galaxy.name);
    output.kv("ID", &galaxy.id);
    if !galaxy.alternate_names.is_empty() {
        output.kv("Also known as", galaxy.alternate_names.join(", "));
    }
    output.kv("Type", &galaxy.morphological_type);
    output.kv(
        "Distance",
        format!(
            "{} ± {} kpc ({:.0} light years)",
            format_distance(galaxy.distance_kpc),
            galaxy.distance_uncertainty_kpc,
            show.distance_ly
        ),
    );
    output.kv("Size", format!("{} kpc", galaxy.size_estimate_kpc));
    output.kv(
        "RA / Dec",
        format!(
            "{} / {} ({} / {})",
            galaxy.coordinates.ra, galaxy.coordinates.dec, show.ra_formatted, show.dec_formatted
        ),
    );
    output.kv(
        "Position",
        format!(
            "({}, {}, {}) kpc",
            galaxy.position_3d.x, galaxy.position_3d.y, galaxy.position_3d.z
        ),
    );
    if !galaxy.notes.is_empty() {
        output.kv("Notes", &galaxy.notes);
    }
    output.kv("Source", format!("{} ({})", galaxy.source, galaxy.citation));

    Ok(())
}
