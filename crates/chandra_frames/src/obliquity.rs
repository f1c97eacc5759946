//! Obliquity of the ecliptic at J2000.0.
//!
//! IAU 2006 value ε₀ = 84381.406″ (Capitaine et al. 2003). The J2000
//! ecliptic frame is the ICRF rotated about +x by this angle.

/// Obliquity at J2000.0 in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = OBLIQUITY_J2000_ARCSEC / 3600.0;

/// Obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * (std::f64::consts::PI / 180.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_and_radians_agree() {
        assert!((OBLIQUITY_J2000_DEG - 23.439_279_444).abs() < 1e-9);
        assert!((OBLIQUITY_J2000_RAD - OBLIQUITY_J2000_DEG.to_radians()).abs() < 1e-15);
    }
}
