//! IAU 2006 precession of the ecliptic.
//!
//! The general precession p_A measures the accumulated westward motion of
//! the vernal equinox along the ecliptic since J2000.0. Together with the
//! inclination π_A and node Π_A of the ecliptic of date on the J2000
//! ecliptic it carries J2000 ecliptic coordinates to the mean ecliptic and
//! equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, _Astronomy & Astrophysics_
//! 412, 567-586 (Table 1). Also published in IERS Conventions 2010, Ch. 5.

use crate::ARCSEC_TO_RAD;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries of TDB since J2000.0. Positive values mean the
/// equinox has moved westward (tropical longitudes of stars have grown).
/// The dominant linear term is ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Same as [`general_precession_longitude_arcsec`], in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Time derivative of p_A, in degrees per day.
pub fn general_precession_rate_deg_per_day(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let arcsec_per_century = 5028.796195 + 2.2108696 * t + 0.00023892 * t2
        - 0.000095428 * t3
        - 0.0000001915 * t4;
    arcsec_per_century / 3600.0 / 36_525.0
}

/// π_A: inclination of the ecliptic of date on the J2000 ecliptic, arcsec.
pub fn inclination_of_ecliptic_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    46.998973 * t - 0.0334926 * t2 - 0.00012559 * t3 + 0.000000113 * t4 - 0.0000000022 * t5
}

/// Π_A: longitude of the ascending node of the ecliptic of date on the
/// J2000 ecliptic, measured from the J2000 equinox, arcsec.
pub fn ecliptic_node_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    629546.7936 - 867.95758 * t + 0.157992 * t2 - 0.0005371 * t3 - 0.00004797 * t4
        + 0.000000072 * t5
}

/// Rotation from the J2000 ecliptic to the mean ecliptic of date:
/// `R3(-(Π_A + p_A)) · R1(π_A) · R3(Π_A)`.
pub fn ecliptic_precession_matrix(t: f64) -> [[f64; 3]; 3] {
    let node = ecliptic_node_longitude_arcsec(t) * ARCSEC_TO_RAD;
    let incl = inclination_of_ecliptic_arcsec(t) * ARCSEC_TO_RAD;
    let p = general_precession_longitude_arcsec(t) * ARCSEC_TO_RAD;
    mat_mul(&mat_mul(&rot_z(-(node + p)), &rot_x(incl)), &rot_z(node))
}

/// Carry a J2000 ecliptic vector to the mean ecliptic and equinox of date.
pub fn precess_ecliptic_j2000_to_date(v: &[f64; 3], t: f64) -> [f64; 3] {
    mat_vec(&ecliptic_precession_matrix(t), v)
}

/// Frame rotation about +x.
fn rot_x(angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]]
}

/// Frame rotation about +z.
fn rot_z(angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]]
}

fn mat_mul(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

fn mat_vec(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
        assert_eq!(inclination_of_ecliptic_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_century_approx() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1.0) = {p}");
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn rate_matches_finite_difference() {
        let t = 0.25;
        let h = 1e-4;
        let numeric = (general_precession_longitude_deg(t + h)
            - general_precession_longitude_deg(t - h))
            / (2.0 * h * 36_525.0);
        let analytic = general_precession_rate_deg_per_day(t);
        assert!((numeric - analytic).abs() < 1e-14, "{numeric} vs {analytic}");
    }

    #[test]
    fn identity_at_j2000() {
        let m = ecliptic_precession_matrix(0.0);
        for (i, row) in m.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((cell - expected).abs() < 1e-15, "m[{i}][{j}] = {cell}");
            }
        }
    }

    #[test]
    fn matrix_is_orthonormal() {
        let m = ecliptic_precession_matrix(0.37);
        for i in 0..3 {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn point_on_node_shifts_by_general_precession() {
        // A point on the J2000 ecliptic at the node stays on the ecliptic of
        // date and its longitude grows by exactly p_A.
        let t = 0.26;
        let node = ecliptic_node_longitude_arcsec(t) * ARCSEC_TO_RAD;
        let v = [node.cos(), node.sin(), 0.0];
        let w = precess_ecliptic_j2000_to_date(&v, t);
        let lon = w[1].atan2(w[0]);
        let expected = node + general_precession_longitude_arcsec(t) * ARCSEC_TO_RAD;
        let diff = (lon - expected).rem_euclid(std::f64::consts::TAU);
        let diff = diff.min(std::f64::consts::TAU - diff);
        assert!(diff < 1e-12, "lon {lon} vs {expected}");
        assert!(w[2].abs() < 1e-12);
    }

    #[test]
    fn latitude_change_bounded_by_inclination() {
        let t = 1.0;
        let incl = inclination_of_ecliptic_arcsec(t) * ARCSEC_TO_RAD;
        for k in 0..12 {
            let lon = f64::from(k) * 30f64.to_radians();
            let w = precess_ecliptic_j2000_to_date(&[lon.cos(), lon.sin(), 0.0], t);
            assert!(w[2].asin().abs() <= incl + 1e-15);
        }
    }
}
