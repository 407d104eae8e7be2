//! Command implementations

mod build;
mod config;
mod distance;
mod list;
mod route;
mod search;
mod show;
mod stats;

use crate::cli::{BuildArgs, Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use localgroup_catalog::Catalog;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or_else(|| Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => build::execute(args, &output, cli.dry_run, config_path),
        Commands::List(args) => list::execute(args, &output),
        Commands::Show(args) => show::execute(args, &output),
        Commands::Search(args) => search::execute(args, &output),
        Commands::Stats => stats::execute(&output),
        Commands::Distance(args) => distance::execute(args, &output),
        Commands::Route(args) => route::execute(args, &output),
        Commands::Config => config::execute(&output, config_path),
    }
}

/// Assemble the built-in catalog
fn load_catalog() -> Result<Catalog> {
    Catalog::local_group().context("Failed to assemble the galaxy catalog")
}
