use localgroup_catalog::{CatalogStats, ExportSummary};
use localgroup_core::config::JsonStyle;
use localgroup_core::models::GalaxyRecord;
use serde::Serialize;
use tabled::Tabled;

/// Output for build command
#[derive(Debug, Serialize)]
pub struct BuildOutput {
    #[serde(flatten)]
    pub summary: ExportSummary,
    pub json_style: JsonStyle,
    pub stats: CatalogStats,
}

/// One line of the galaxy table
#[derive(Debug, Serialize, Tabled)]
pub struct GalaxyRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub morphological_type: String,
    #[tabled(rename = "Distance (kpc)")]
    pub distance_kpc: f64,
    #[tabled(rename = "X")]
    pub x: f64,
    #[tabled(rename = "Y")]
    pub y: f64,
    #[tabled(rename = "Z")]
    pub z: f64,
}

impl From<&GalaxyRecord> for GalaxyRow {
    fn from(galaxy: &GalaxyRecord) -> Self {
        Self {
            id: galaxy.id.clone(),
            name: galaxy.name.clone(),
            morphological_type: galaxy.morphological_type.clone(),
            distance_kpc: galaxy.distance_kpc,
            x: galaxy.position_3d.x,
            y: galaxy.position_3d.y,
            z: galaxy.position_3d.z,
        }
    }
}

/// Output for show command
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    #[serde(flatten)]
    pub galaxy: GalaxyRecord,
    pub distance_ly: f64,
    pub ra_formatted: String,
    pub dec_formatted: String,
}

/// Output for distance command
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub from: String,
    pub to: String,
    pub distance_kpc: f64,
    pub distance_ly: f64,
    pub speed_fraction: f64,
    pub travel_time_years: f64,
}

/// Output for route command
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub stops: Vec<String>,
    pub legs: Vec<RouteLeg>,
    pub total_distance_kpc: f64,
    pub total_distance_ly: f64,
    pub speed_fraction: f64,
    pub travel_time_years: f64,
}

#[derive(Debug, Serialize, Tabled)]
pub struct RouteLeg {
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Distance (kpc)")]
    pub distance_kpc: f64,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub output_dir: ConfigEntry,
    pub galaxies_file: ConfigEntry,
    pub metadata_file: ConfigEntry,
    pub json_style: ConfigEntry,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
