//! Fixed-precision rounding used for every derived catalog value.

/// Round `value` to `places` decimal places.
///
/// The exact binary value is rounded, with exact ties going to the even
/// digit (`5.25` becomes `5.2`, `5.35` becomes `5.3` because it is stored
/// just below the tie). Negative zero is normalized to positive zero so that
/// serialized output never contains `-0.0`.
pub fn round_to(value: f64, places: u32) -> f64 {
    let formatted = format!("{:.*}", places as usize, value);
    formatted.parse::<f64>().unwrap_or(value) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to(38.5, 1), 38.5);
        assert_eq!(round_to(10.6845833333, 6), 10.684583);
        assert_eq!(round_to(-29.0077777, 2), -29.01);
        assert_eq!(round_to(1.005, 0), 1.0);
    }

    #[test]
    fn test_round_to_exact_ties_go_to_even() {
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(1.75, 1), 1.8);
        assert_eq!(round_to(5.25, 1), 5.2);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-40.25, 1), -40.2);
    }

    #[test]
    fn test_round_to_normalizes_negative_zero() {
        let rounded = round_to(-0.001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    proptest! {
        #[test]
        fn test_round_to_stays_within_half_unit(value in -1.0e6f64..1.0e6) {
            let rounded = round_to(value, 2);
            prop_assert!((rounded - value).abs() <= 0.005 + 1e-9);
            prop_assert_eq!(round_to(rounded, 2), rounded);
        }
    }
}
