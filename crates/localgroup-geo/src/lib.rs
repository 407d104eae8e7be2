//! Local Group Geo - Angles, coordinate transforms, and distances
//!
//! This crate handles the numeric side of the catalog: sexagesimal angle
//! parsing and formatting, equatorial to Cartesian projection, and distance
//! and travel-time arithmetic over catalog positions.

pub mod distance;
pub mod sexagesimal;
pub mod transform;

pub use sexagesimal::{format_dec, format_ra, parse_dec_degrees, parse_ra_degrees};
pub use transform::{cartesian_to_equatorial, equatorial_to_cartesian, SphericalPosition};
