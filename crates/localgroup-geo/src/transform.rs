//! Equatorial to Cartesian projection
//!
//! Positions are observer-centered: the origin is the Earth, +x points to
//! RA 0h / Dec 0°, +y to RA 6h / Dec 0°, and +z to the north celestial pole.
//! No rotation into a galactic frame is applied.

use localgroup_core::models::Position3d;
use localgroup_core::numeric::round_to;

/// Decimal places kept on each Cartesian component
pub const POSITION_DECIMALS: u32 = 2;

/// Spherical equatorial position recovered from a Cartesian point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub distance: f64,
}

/// Project (RA°, Dec°, distance) to Cartesian, rounding each component to
/// two decimal places. The output shares the distance unit.
pub fn equatorial_to_cartesian(ra_deg: f64, dec_deg: f64, distance: f64) -> Position3d {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();

    Position3d::new(
        round_to(distance * dec.cos() * ra.cos(), POSITION_DECIMALS),
        round_to(distance * dec.cos() * ra.sin(), POSITION_DECIMALS),
        round_to(distance * dec.sin(), POSITION_DECIMALS),
    )
}

/// Inverse of [`equatorial_to_cartesian`], without rounding.
///
/// RA comes from `atan2` and therefore lies in (-180°, 180°]. The origin maps
/// to zero angles and zero distance.
pub fn cartesian_to_equatorial(position: &Position3d) -> SphericalPosition {
    let distance = position.magnitude();
    if distance == 0.0 {
        return SphericalPosition { ra_deg: 0.0, dec_deg: 0.0, distance: 0.0 };
    }

    SphericalPosition {
        ra_deg: position.y.atan2(position.x).to_degrees(),
        dec_deg: (position.z / distance).asin().to_degrees(),
        distance,
    }
}
