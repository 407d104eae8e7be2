use super::load_catalog;
use crate::cli::DistanceArgs;
use crate::output::OutputWriter;
use crate::output_types::DistanceOutput;
use anyhow::Result;
use localgroup_geo::distance::{
    euclidean_distance, format_distance, format_years, kpc_to_light_years, parse_speed,
    travel_time_years,
};

pub fn execute(args: DistanceArgs, output: &OutputWriter) -> Result<()> {
    let speed = parse_speed(&args.speed)?;
    let catalog = load_catalog()?;
    let from = catalog.get(&args.from)?;
    let to = catalog.get(&args.to)?;

    let distance_kpc = euclidean_distance(&from.position_3d, &to.position_3d);
    let result = DistanceOutput {
        from: from.id.clone(),
        to: to.id.clone(),
        distance_kpc,
        distance_ly: kpc_to_light_years(distance_kpc),
        speed_fraction: speed,
        travel_time_years: travel_time_years(distance_kpc, speed)?,
    };

    if output.is_json() {
        return output.result(result);
    }

    output.section(format!("{} → {}", from.name, to.name));
    output.kv(
        "Distance",
        format!("{} ({:.0} light years)", format_distance(distance_kpc), result.distance_ly),
    );
    output.kv(format!("Travel time at {}c", speed), format_years(result.travel_time_years));

    Ok(())
}
