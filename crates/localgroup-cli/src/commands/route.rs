use super::load_catalog;
use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use crate::output_types::{RouteLeg, RouteOutput};
use anyhow::Result;
use localgroup_core::models::GalaxyRecord;
use localgroup_geo::distance::{
    euclidean_distance, format_distance, format_years, kpc_to_light_years, parse_speed,
    route_distance, travel_time_years,
};

pub fn execute(args: RouteArgs, output: &OutputWriter) -> Result<()> {
    let speed = parse_speed(&args.speed)?;
    let catalog = load_catalog()?;
    let stops = args
        .stops
        .iter()
        .map(|query| catalog.get(query))
        .collect::<localgroup_core::Result<Vec<&GalaxyRecord>>>()?;

    let legs: Vec<RouteLeg> = stops
        .windows(2)
        .map(|pair| RouteLeg {
            from: pair[0].id.clone(),
            to: pair[1].id.clone(),
            distance_kpc: euclidean_distance(&pair[0].position_3d, &pair[1].position_3d),
        })
        .collect();

    let positions: Vec<_> = stops.iter().map(|g| g.position_3d).collect();
    let total_distance_kpc = route_distance(&positions);
    let result = RouteOutput {
        stops: stops.iter().map(|g| g.id.clone()).collect(),
        legs,
        total_distance_kpc,
        total_distance_ly: kpc_to_light_years(total_distance_kpc),
        speed_fraction: speed,
        travel_time_years: travel_time_years(total_distance_kpc, speed)?,
    };

    if output.is_json() {
        return output.result(result);
    }

    let names: Vec<&str> = stops.iter().map(|g| g.name.as_str()).collect();
    output.section(format!("Route: {}", names.join(" → ")));
    output.table(result.legs)?;
    output.kv(
        "Total distance",
        format!(
            "{} ({:.0} light years)",
            format_distance(total_distance_kpc),
            result.total_distance_ly
        ),
    );
    output.kv(format!("Travel time at {}c", speed), format_years(result.travel_time_years));

    Ok(())
}
