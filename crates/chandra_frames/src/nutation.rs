//! Nutation in longitude, four-term series.
//!
//! Δψ from the dominant lunisolar terms (Meeus, *Astronomical Algorithms*,
//! ch. 22), good to about 0.5″. Arguments are mean longitudes in degrees.

/// Nutation in longitude Δψ in arcseconds.
///
/// `t` is Julian centuries of TDB since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    // Ω: mean longitude of the Moon's ascending node.
    let om = (125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450_000.0).to_radians();
    // L, L': mean longitudes of the Sun and the Moon.
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_by_principal_amplitudes() {
        for k in -40..=40 {
            let t = f64::from(k) * 0.05;
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() <= 17.20 + 1.32 + 0.23 + 0.21, "t={t}: {dpsi}");
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-04-10 0h TD: Δψ = -3.788″ (full series); the short series
        // lands within half an arcsecond.
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_longitude_arcsec(t);
        assert!((dpsi + 3.788).abs() < 0.5, "Δψ = {dpsi}");
    }

    #[test]
    fn node_period_dominates() {
        // Half a nodal period (~9.3 years) flips the sign of the main term.
        let a = nutation_longitude_arcsec(0.0);
        let b = nutation_longitude_arcsec(0.093);
        assert!(a * b < 0.0, "{a} vs {b}");
    }
}
