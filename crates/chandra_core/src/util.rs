//! Angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose sum with 360 rounds to 360 map to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_unchanged() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(45.5), 45.5);
        assert_eq!(normalize_360(359.75), 359.75);
    }

    #[test]
    fn wraps_full_turns() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn negative_wraps_up() {
        assert_eq!(normalize_360(-10.0), 350.0);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "{r}");
    }
}
