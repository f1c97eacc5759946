//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! `ayanamsha(T) = reference_j2000 + p_A(T)`, with p_A the IAU 2006 general
//! precession in longitude. The true value adds nutation in longitude so it
//! is measured from the same true equinox as tropical longitudes of date.

use chandra_frames::{general_precession_longitude_deg, nutation_longitude_arcsec};

/// Lahiri ayanamsha at J2000.0 in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.857_092;

/// Mean Lahiri ayanamsha in degrees, `t` in Julian centuries since J2000.0.
pub fn lahiri_mean_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_longitude_deg(t)
}

/// True (nutation-corrected) Lahiri ayanamsha in degrees.
pub fn lahiri_true_deg(t: f64) -> f64 {
    lahiri_mean_deg(t) + nutation_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_at_j2000() {
        assert_eq!(lahiri_mean_deg(0.0), LAHIRI_J2000_DEG);
    }

    #[test]
    fn published_value_for_2024() {
        // Rashtriya Panchang 2024: Lahiri ~24.19°.
        let t = (2_460_310.5 - 2_451_545.0) / 36_525.0;
        let val = lahiri_mean_deg(t);
        assert!((val - 24.19).abs() < 0.02, "Lahiri 2024 = {val}");
    }

    #[test]
    fn grows_about_1_4_degrees_per_century() {
        let rate = lahiri_mean_deg(1.0) - lahiri_mean_deg(0.0);
        assert!((rate - 1.397).abs() < 0.001, "{rate}");
    }

    #[test]
    fn true_differs_from_mean_by_under_20_arcsec() {
        for k in 0..50 {
            let t = f64::from(k) * 0.01;
            let d = (lahiri_true_deg(t) - lahiri_mean_deg(t)).abs() * 3600.0;
            assert!(d < 20.0, "t={t}: {d}″");
        }
    }
}
