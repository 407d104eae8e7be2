//! Distances, unit conversion, and travel time between catalog positions

use localgroup_core::error::{CatalogError, Result};
use localgroup_core::models::Position3d;

/// Light years per kiloparsec
pub const KPC_TO_LIGHT_YEARS: f64 = 3260.47;

/// Named cruise speeds, as a fraction of the speed of light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedProfile {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl SpeedProfile {
    pub fn fraction(&self) -> f64 {
        match self {
            SpeedProfile::Slow => 0.1,
            SpeedProfile::Medium => 0.25,
            SpeedProfile::Fast => 0.5,
        }
    }
}

/// Parse a speed given either as a profile name (`slow`, `medium`, `fast`)
/// or as a fraction of c in (0, 1].
pub fn parse_speed(s: &str) -> Result<f64> {
    let fraction = match s.trim().to_lowercase().as_str() {
        "slow" => SpeedProfile::Slow.fraction(),
        "medium" => SpeedProfile::Medium.fraction(),
        "fast" => SpeedProfile::Fast.fraction(),
        other => other.trim_end_matches('c').parse::<f64>().map_err(|_| {
            CatalogError::ConfigInvalid {
                key: "speed".to_string(),
                reason: format!("Invalid speed: {}. Use slow, medium, fast, or a fraction of c", s),
            }
        })?,
    };
    validate_speed(fraction)?;
    Ok(fraction)
}

fn validate_speed(fraction: f64) -> Result<()> {
    if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
        return Err(CatalogError::ConfigInvalid {
            key: "speed".to_string(),
            reason: format!("Speed must be a fraction of c in (0, 1], got {}", fraction),
        });
    }
    Ok(())
}

/// Straight-line distance between two positions, in their unit
pub fn euclidean_distance(a: &Position3d, b: &Position3d) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

pub fn kpc_to_light_years(distance_kpc: f64) -> f64 {
    distance_kpc * KPC_TO_LIGHT_YEARS
}

/// Years needed to cover `distance_kpc` at `speed_fraction` of c
pub fn travel_time_years(distance_kpc: f64, speed_fraction: f64) -> Result<f64> {
    validate_speed(speed_fraction)?;
    Ok(kpc_to_light_years(distance_kpc) / speed_fraction)
}

/// Total length of a path visiting `stops` in order; zero with fewer than two
pub fn route_distance(stops: &[Position3d]) -> f64 {
    stops.windows(2).map(|leg| euclidean_distance(&leg[0], &leg[1])).sum()
}

/// Human-readable distance: kpc below 1000 kpc, Mpc above
pub fn format_distance(distance_kpc: f64) -> String {
    if distance_kpc < 1.0 {
        format!("{:.2} kpc", distance_kpc)
    } else if distance_kpc < 1000.0 {
        format!("{:.1} kpc", distance_kpc)
    } else {
        format!("{:.2} Mpc", distance_kpc / 1000.0)
    }
}

/// Human-readable duration in years
pub fn format_years(years: f64) -> String {
    if years >= 1e9 {
        format!("{:.2} billion years", years / 1e9)
    } else if years >= 1e6 {
        format!("{:.2} million years", years / 1e6)
    } else if years >= 1e3 {
        format!("{:.2} thousand years", years / 1e3)
    } else {
        format!("{:.0} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let a = Position3d::new(1.0, 2.0, 3.0);
        let b = Position3d::new(4.0, 6.0, 15.0);
        assert_eq!(euclidean_distance(&a, &b), 13.0);
        assert_eq!(euclidean_distance(&b, &a), 13.0);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_light_years() {
        assert_eq!(kpc_to_light_years(1.0), 3260.47);
        assert_eq!(kpc_to_light_years(0.0), 0.0);
    }

    #[test]
    fn test_travel_time() {
        let years = travel_time_years(1.0, 0.25).unwrap();
        assert!((years - 13041.88).abs() < 1e-6);
        assert!(travel_time_years(1.0, 0.0).is_err());
        assert!(travel_time_years(1.0, 1.5).is_err());
        assert!(travel_time_years(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_route_distance() {
        assert_eq!(route_distance(&[]), 0.0);
        assert_eq!(route_distance(&[Position3d::new(5.0, 5.0, 5.0)]), 0.0);

        let stops = [
            Position3d::origin(),
            Position3d::new(3.0, 4.0, 0.0),
            Position3d::new(3.0, 4.0, 12.0),
        ];
        assert_eq!(route_distance(&stops), 17.0);
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed("slow").unwrap(), 0.1);
        assert_eq!(parse_speed("MEDIUM").unwrap(), 0.25);
        assert_eq!(parse_speed("fast").unwrap(), 0.5);
        assert_eq!(parse_speed("0.75").unwrap(), 0.75);
        assert_eq!(parse_speed("0.5c").unwrap(), 0.5);
        assert!(parse_speed("warp").is_err());
        assert!(parse_speed("2").is_err());
        assert!(parse_speed("-0.1").is_err());
    }

    #[test]
    fn test_default_profile() {
        assert_eq!(SpeedProfile::default().fraction(), 0.25);
        assert_eq!(SpeedProfile::Slow.fraction(), 0.1);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.5), "0.50 kpc");
        assert_eq!(format_distance(770.0), "770.0 kpc");
        assert_eq!(format_distance(1250.0), "1.25 Mpc");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(500.0), "500 years");
        assert_eq!(format_years(13_041.88), "13.04 thousand years");
        assert_eq!(format_years(2.5e6), "2.50 million years");
        assert_eq!(format_years(1.2e10), "12.00 billion years");
    }
}
