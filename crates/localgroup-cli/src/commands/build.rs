use super::load_catalog;
use crate::cli::BuildArgs;
use crate::config_loader::load_config;
use crate::dry_run::{display_planned_actions, ActionType, PlannedAction};
use crate::output::OutputWriter;
use crate::output_types::BuildOutput;
use anyhow::{Context, Result};
use localgroup_catalog::{export_catalog, render, CatalogStats, ExportTarget};
use localgroup_core::config::{CliConfigOverrides, JsonStyle};
use std::path::Path;

pub fn execute(
    args: BuildArgs,
    output: &OutputWriter,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path, overrides(args))?;
    let target = ExportTarget::from_config(&config);

    // Any malformed row aborts here, before the filesystem is touched
    let catalog = load_catalog()?;

    if dry_run {
        let rendered = render(&catalog, target.style)?;

        let mut actions = Vec::new();
        for dir in output_dirs(&target) {
            if !dir.exists() {
                actions.push(
                    PlannedAction::new(ActionType::CreateDirectory, "Create output directory")
                        .with_detail(format!("Path: {}", dir.display())),
                );
            }
        }
        actions.push(
            write_action(&target.galaxies_path, "Write galaxy list")
                .with_detail(format!("Galaxies: {}", catalog.len()))
                .with_detail(format!("Size: {} bytes", rendered.galaxies_json.len())),
        );
        actions.push(
            write_action(&target.metadata_path, "Write metadata record")
                .with_detail(format!("galaxy_count: {}", catalog.metadata().galaxy_count))
                .with_detail(format!("Size: {} bytes", rendered.metadata_json.len())),
        );

        return display_planned_actions(output, &actions);
    }

    let summary = export_catalog(&catalog, &target).with_context(|| {
        format!("Failed to write catalog files to {}", config.output_dir.value.display())
    })?;
    let stats = catalog.stats();

    if output.is_json() {
        output.result(BuildOutput { summary, json_style: target.style, stats })?;
        return Ok(());
    }

    output.success(format!("Processed {} galaxies", summary.galaxy_count));
    output.success(format!("Saved {}", summary.galaxies_path.display()));
    output.success(format!("Saved {}", summary.metadata_path.display()));
    display_stats(output, &stats);

    Ok(())
}

fn overrides(args: BuildArgs) -> CliConfigOverrides {
    CliConfigOverrides {
        output_dir: args.output_dir,
        galaxies_file: args.galaxies_file,
        metadata_file: args.metadata_file,
        json_style: args.compact.then_some(JsonStyle::Compact),
    }
}

/// Parent directories of both output files, deduplicated
fn output_dirs(target: &ExportTarget) -> Vec<&Path> {
    let mut dirs: Vec<&Path> = [&target.galaxies_path, &target.metadata_path]
        .into_iter()
        .filter_map(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();
    dirs.dedup();
    dirs
}

fn write_action(path: &Path, description: &str) -> PlannedAction {
    let action_type = if path.exists() { ActionType::ReplaceFile } else { ActionType::WriteFile };
    PlannedAction::new(action_type, description).with_detail(format!("Path: {}", path.display()))
}

/// Human-readable statistics, shared with the stats command
pub(super) fn display_stats(output: &OutputWriter, stats: &CatalogStats) {
    output.section("Catalog Statistics");
    output.kv("Total galaxies", stats.total);

    output.section("By morphological type");
    for entry in &stats.by_type {
        output.kv(&entry.morphological_type, entry.count);
    }

    output.section("Distances");
    match (stats.distance_range_kpc, stats.mean_distance_kpc) {
        (Some((nearest, farthest)), Some(mean)) => {
            output.kv("Range", format!("{:.1} - {:.1} kpc", nearest, farthest));
            output.kv("Average", format!("{:.1} kpc", mean));
        }
        _ => output.info("No galaxies with a non-zero distance"),
    }
}
