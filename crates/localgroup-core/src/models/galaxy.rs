//! Galaxy record types.
//!
//! A [`GalaxyRecord`] is produced once per catalog row and never mutated
//! afterwards. Its serialized layout is the public `galaxies.json` format.

use crate::numeric::round_to;
use serde::{Deserialize, Serialize};

/// Fraction of the distance reported as its uncertainty.
pub const DISTANCE_UNCERTAINTY_FRACTION: f64 = 0.05;

/// Cartesian position in kiloparsecs, observer-centered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// Radial distance from the observer
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Equatorial (J2000.0) coordinates, kept both as the literature string and
/// as decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    /// Right ascension, `HH:MM:SS.s`
    pub ra: String,

    /// Declination, `±DD:MM:SS`
    pub dec: String,

    /// Right ascension in degrees, rounded to 6 places
    pub ra_deg: f64,

    /// Declination in degrees, rounded to 6 places
    pub dec_deg: f64,
}

/// One assembled catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyRecord {
    /// Identifier derived from the name, see [`galaxy_id`]
    pub id: String,

    /// Display name
    pub name: String,

    /// Other designations, in table order
    pub alternate_names: Vec<String>,

    /// Morphological classification code (e.g. "dSph", "Irr", "Sb")
    #[serde(rename = "type")]
    pub galaxy_type: String,

    pub coordinates: EquatorialCoordinates,

    pub position_3d: Position3d,

    pub distance_kpc: f64,

    pub distance_uncertainty_kpc: f64,

    pub size_estimate_kpc: f64,

    pub morphological_type: String,

    pub notes: String,

    pub source: String,

    pub source_url: String,

    pub citation: String,
}

impl GalaxyRecord {
    /// True when `query` equals the id, the name, or an alternate name,
    /// ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.id == query
            || self.name.to_lowercase() == query
            || self.alternate_names.iter().any(|alt| alt.to_lowercase() == query)
    }

    /// True when `text` occurs in the name, an alternate name, or the
    /// morphological type, ignoring case.
    pub fn mentions(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return false;
        }
        self.name.to_lowercase().contains(&text)
            || self.alternate_names.iter().any(|alt| alt.to_lowercase().contains(&text))
            || self.morphological_type.to_lowercase().contains(&text)
    }
}

/// Derive a catalog id from a display name: lowercase, spaces become
/// underscores, parentheses are dropped.
pub fn galaxy_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Distance uncertainty in kpc: 5% of the distance, one decimal place.
pub fn distance_uncertainty(distance_kpc: f64) -> f64 {
    round_to(distance_kpc * DISTANCE_UNCERTAINTY_FRACTION, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> GalaxyRecord {
        GalaxyRecord {
            id: galaxy_id("Andromeda (M31)"),
            name: "Andromeda (M31)".to_string(),
            alternate_names: vec!["M31".to_string(), "NGC 224".to_string()],
            galaxy_type: "Sb".to_string(),
            coordinates: EquatorialCoordinates {
                ra: "00:42:44.3".to_string(),
                dec: "+41:16:09".to_string(),
                ra_deg: 10.684583,
                dec_deg: 41.269167,
            },
            position_3d: Position3d::new(568.71, 107.3, 507.89),
            distance_kpc: 770.0,
            distance_uncertainty_kpc: distance_uncertainty(770.0),
            size_estimate_kpc: 110.0,
            morphological_type: "Sb".to_string(),
            notes: "Nearest large galaxy to Milky Way".to_string(),
            source: "Caltech NED / McConnachie 2012".to_string(),
            source_url: "https://ned.ipac.caltech.edu/level5/Mateo/table1.html".to_string(),
            citation: "McConnachie, A. W. 2012, AJ, 144, 4".to_string(),
        }
    }

    #[test]
    fn test_galaxy_id() {
        assert_eq!(galaxy_id("Andromeda (M31)"), "andromeda_m31");
        assert_eq!(galaxy_id("M32"), "m32");
        assert_eq!(galaxy_id("Large Magellanic Cloud"), "large_magellanic_cloud");
        assert_eq!(galaxy_id("Boötes I"), "boötes_i");
    }

    #[test]
    fn test_distance_uncertainty() {
        assert_eq!(distance_uncertainty(770.0), 38.5);
        assert_eq!(distance_uncertainty(0.0), 0.0);
        assert_eq!(distance_uncertainty(26.0), 1.3);
    }

    #[test]
    fn test_distance_uncertainty_ties_round_to_even() {
        assert_eq!(distance_uncertainty(105.0), 5.2);
        assert_eq!(distance_uncertainty(805.0), 40.2);
        assert_eq!(distance_uncertainty(1065.0), 53.2);
    }

    #[test]
    fn test_record_serializes_type_field() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["type"], "Sb");
        assert_eq!(json["morphological_type"], "Sb");
        assert_eq!(json["coordinates"]["ra"], "00:42:44.3");
        assert_eq!(json["position_3d"]["x"], 568.71);
        assert_eq!(json["distance_uncertainty_kpc"], 38.5);
        assert!(json.get("galaxy_type").is_none());
    }

    #[test]
    fn test_matches_id_name_and_alternates() {
        let record = sample_record();
        assert!(record.matches("andromeda_m31"));
        assert!(record.matches("ANDROMEDA (M31)"));
        assert!(record.matches("ngc 224"));
        assert!(!record.matches("M3"));
    }

    #[test]
    fn test_mentions_substring() {
        let record = sample_record();
        assert!(record.mentions("andro"));
        assert!(record.mentions("224"));
        assert!(record.mentions("sb"));
        assert!(!record.mentions(""));
        assert!(!record.mentions("magellan"));
    }

    #[test]
    fn test_position_magnitude() {
        assert_eq!(Position3d::new(3.0, 4.0, 12.0).magnitude(), 13.0);
        assert_eq!(Position3d::origin().magnitude(), 0.0);
    }
}
