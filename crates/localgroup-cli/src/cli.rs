use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Local Group catalog builder
#[derive(Parser, Debug)]
#[command(name = "localgroup")]
#[command(about = "Build and explore a 3D catalog of Local Group galaxies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the files `build` would write without writing them (other commands
    /// never write files and ignore this flag)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Configuration file (defaults to ./localgroup.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the catalog and write the galaxy and metadata JSON files
    Build(BuildArgs),

    /// List catalog galaxies
    List(ListArgs),

    /// Show a single galaxy by id, name, or alternate name
    Show(ShowArgs),

    /// Search names, alternate names, and morphological types
    Search(SearchArgs),

    /// Show catalog statistics
    Stats,

    /// Distance and travel time between two galaxies
    Distance(DistanceArgs),

    /// Total length of a route through several galaxies
    Route(RouteArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// Directory the JSON files are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the galaxy list
    #[arg(long, value_name = "NAME")]
    pub galaxies_file: Option<String>,

    /// File name of the metadata record
    #[arg(long, value_name = "NAME")]
    pub metadata_file: Option<String>,

    /// Write single-line JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only galaxies of this morphological type (e.g. dSph, Irr)
    #[arg(long = "type", value_name = "TYPE")]
    pub galaxy_type: Option<String>,

    /// Sort order (catalog order when omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Alphabetical by name
    Name,
    /// Nearest first
    Distance,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Galaxy id, name, or alternate name
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for
    pub text: String,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    /// Starting galaxy
    pub from: String,

    /// Destination galaxy
    pub to: String,

    /// Cruise speed: slow, medium, fast, or a fraction of c such as 0.8
    #[arg(long, default_value = "medium")]
    pub speed: String,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Galaxies to visit, in order
    #[arg(required = true, num_args = 2..)]
    pub stops: Vec<String>,

    /// Cruise speed: slow, medium, fast, or a fraction of c such as 0.8
    #[arg(long, default_value = "medium")]
    pub speed: String,
}
