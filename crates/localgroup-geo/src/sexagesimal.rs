//! Sexagesimal angle parsing and formatting.
//!
//! Catalog coordinates are written as colon-separated fields:
//!
//! ```text
//! Right ascension:  HH:MM:SS.s   (1 hour = 15 degrees)
//! Declination:     ±DD:MM:SS     (sign applies to the whole angle)
//! ```
//!
//! One to three fields are accepted; missing minutes and seconds are zero.
//! A sign is only valid as the first character of a declination, so
//! `-00:32:00` is half a degree south while `12:-30:00` is rejected.

use localgroup_core::error::{CatalogError, Result};

const DEGREES_PER_HOUR: f64 = 15.0;

/// Parse a right ascension string (`HH[:MM[:SS.s]]`) into decimal degrees
pub fn parse_ra_degrees(ra: &str) -> Result<f64> {
    let [hours, minutes, seconds] = split_fields("ra", ra, ra)?;
    Ok((hours + minutes / 60.0 + seconds / 3600.0) * DEGREES_PER_HOUR)
}

/// Parse a declination string (`±DD[:MM[:SS]]`) into decimal degrees
pub fn parse_dec_degrees(dec: &str) -> Result<f64> {
    let (sign, body) = match dec.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, dec.strip_prefix('+').unwrap_or(dec)),
    };
    let [degrees, minutes, seconds] = split_fields("dec", dec, body)?;
    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Split `body` into up to three unsigned numeric fields, defaulting the
/// missing trailing ones to zero.
fn split_fields(field: &str, original: &str, body: &str) -> Result<[f64; 3]> {
    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() > 3 {
        return Err(CatalogError::malformed(
            field,
            original,
            format!("expected 1-3 colon-separated fields, found {}", parts.len()),
        ));
    }

    let mut values = [0.0; 3];
    for (index, part) in parts.iter().enumerate() {
        if part.starts_with(['+', '-']) {
            return Err(CatalogError::malformed(
                field,
                original,
                format!(
                    "field {} ('{}') carries a sign; only a leading declination sign is allowed",
                    index + 1,
                    part
                ),
            ));
        }
        let value: f64 = part.parse().map_err(|_| {
            CatalogError::malformed(
                field,
                original,
                format!("field {} ('{}') is not a number", index + 1, part),
            )
        })?;
        if !value.is_finite() {
            return Err(CatalogError::malformed(
                field,
                original,
                format!("field {} ('{}') is not finite", index + 1, part),
            ));
        }
        values[index] = value;
    }

    Ok(values)
}

/// Format right ascension degrees as `HH:MM:SS`, truncating each field.
/// Angles outside [0, 360) are wrapped first.
pub fn format_ra(ra_deg: f64) -> String {
    let [h, m, s] = truncated_fields(ra_deg.rem_euclid(360.0) / DEGREES_PER_HOUR);
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Format declination degrees as `±DD:MM:SS`, truncating each field
pub fn format_dec(dec_deg: f64) -> String {
    let sign = if dec_deg >= 0.0 { '+' } else { '-' };
    let [d, m, s] = truncated_fields(dec_deg.abs());
    format!("{}{:02}:{:02}:{:02}", sign, d, m, s)
}

fn truncated_fields(value: f64) -> [u64; 3] {
    let whole = value.floor();
    let minutes = (value - whole) * 60.0;
    let m = minutes.floor();
    let s = ((minutes - m) * 60.0).floor();
    [whole as u64, m as u64, s as u64]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_ra_full() {
        let ra = parse_ra_degrees("00:42:44.3").unwrap();
        let expected = (42.0 / 60.0 + 44.3 / 3600.0) * 15.0;
        assert!((ra - expected).abs() < 1e-12);
        assert!((ra - 10.684583).abs() < 1e-6);
    }

    #[test]
    fn test_parse_ra_missing_fields_default_to_zero() {
        assert_eq!(parse_ra_degrees("12").unwrap(), 180.0);
        assert_eq!(parse_ra_degrees("12:30").unwrap(), 187.5);
    }

    #[test]
    fn test_parse_dec_signs() {
        let south = parse_dec_degrees("-29:00:28").unwrap();
        assert!((south - -29.007778).abs() < 1e-6);

        let north = parse_dec_degrees("+41:16:09").unwrap();
        assert!((north - 41.269167).abs() < 1e-6);

        let unsigned = parse_dec_degrees("41:16:09").unwrap();
        assert_eq!(unsigned, north);
    }

    #[test]
    fn test_parse_dec_negative_zero_degrees() {
        // Sign applies to minutes even when the degree field is zero
        let dec = parse_dec_degrees("-00:32:00").unwrap();
        assert!((dec - -0.533333).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_ra_degrees("").is_err());
        assert!(parse_ra_degrees("01:02:03:04").is_err());
        assert!(parse_ra_degrees("01:xx:03").is_err());
        assert!(parse_ra_degrees("01::03").is_err());
        assert!(parse_ra_degrees(" 01:02:03").is_err());
        assert!(parse_ra_degrees("inf").is_err());
        assert!(parse_dec_degrees("+-12:00:00").is_err());
        assert!(parse_dec_degrees("12:-30:00").is_err());
        assert!(parse_dec_degrees("-").is_err());
    }

    #[test]
    fn test_malformed_error_reports_field() {
        let err = parse_dec_degrees("+41:1x:09").unwrap_err();
        match err {
            CatalogError::MalformedCoordinate { field, value, reason } => {
                assert_eq!(field, "dec");
                assert_eq!(value, "+41:1x:09");
                assert!(reason.contains("field 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_ra_and_dec() {
        assert_eq!(format_ra(10.684583), "00:42:44");
        assert_eq!(format_ra(180.0), "12:00:00");
        assert_eq!(format_dec(41.269167), "+41:16:09");
        assert_eq!(format_dec(-29.007778), "-29:00:28");
        assert_eq!(format_dec(0.0), "+00:00:00");
    }

    #[test]
    fn test_format_ra_wraps_negative_angles() {
        assert_eq!(format_ra(-7.5), "23:30:00");
        assert_eq!(format_ra(-90.0), "18:00:00");
        assert_eq!(format_ra(-180.0), "12:00:00");
        assert_eq!(format_ra(360.0), "00:00:00");
    }

    proptest! {
        #[test]
        fn prop_ra_format_parse_within_one_second(ra in 0.0f64..359.99) {
            let back = parse_ra_degrees(&format_ra(ra)).unwrap();
            // Truncation loses at most one second of time (15 arcseconds)
            prop_assert!(back <= ra + 1e-9);
            prop_assert!(ra - back < 15.0 / 3600.0 + 1e-9);
        }

        #[test]
        fn prop_dec_format_parse_within_one_arcsecond(dec in -89.99f64..89.99) {
            let back = parse_dec_degrees(&format_dec(dec)).unwrap();
            prop_assert!((dec - back).abs() < 1.0 / 3600.0 + 1e-9);
            prop_assert_eq!(back < 0.0, dec < 0.0 && back != 0.0);
        }

        #[test]
        fn prop_dec_sign_mirrors_magnitude(d in 0u32..90, m in 0u32..60, s in 0u32..60) {
            let north = parse_dec_degrees(&format!("+{:02}:{:02}:{:02}", d, m, s)).unwrap();
            let south = parse_dec_degrees(&format!("-{:02}:{:02}:{:02}", d, m, s)).unwrap();
            prop_assert_eq!(north, -south);
        }
    }
}
