//! Rotation between the ICRF equatorial frame and the J2000 ecliptic.

use crate::obliquity::OBLIQUITY_J2000_RAD;

/// Rotate an ICRF vector into the ecliptic J2000 frame (about +x by ε₀).
pub fn icrf_to_ecliptic(v: &[f64; 3]) -> [f64; 3] {
    let (s, c) = OBLIQUITY_J2000_RAD.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Inverse of [`icrf_to_ecliptic`].
pub fn ecliptic_to_icrf(v: &[f64; 3]) -> [f64; 3] {
    let (s, c) = OBLIQUITY_J2000_RAD.sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn x_axis_is_invariant() {
        let e = icrf_to_ecliptic(&[1.0, 0.0, 0.0]);
        assert_eq!(e, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn celestial_pole_tilts_by_obliquity() {
        // The ICRF pole sits at ecliptic longitude 90°, latitude 90° - ε₀.
        let e = icrf_to_ecliptic(&[0.0, 0.0, 1.0]);
        assert!((e[1] - OBLIQUITY_J2000_RAD.sin()).abs() < EPS);
        assert!((e[2] - OBLIQUITY_J2000_RAD.cos()).abs() < EPS);
    }

    #[test]
    fn inverse_restores_vector() {
        let v = [0.3, -0.7, 0.64];
        let back = ecliptic_to_icrf(&icrf_to_ecliptic(&v));
        for k in 0..3 {
            assert!((back[k] - v[k]).abs() < EPS);
        }
    }
}
