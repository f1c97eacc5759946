//! Cartesian to spherical state conversion.

use std::f64::consts::TAU;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Spherical position with rates, in the frame of the input vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalState {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
    /// Longitude rate in deg/day.
    pub lon_speed: f64,
    /// Latitude rate in deg/day.
    pub lat_speed: f64,
    /// Radial velocity in km/s.
    pub distance_speed: f64,
}

/// Convert a Cartesian state (km, km/s) to longitude, latitude and distance
/// with their rates.
///
/// Degenerate cases (origin, or on the polar axis) report zero angular rates.
pub fn cartesian_state_to_spherical_state(pos: &[f64; 3], vel: &[f64; 3]) -> SphericalState {
    const TINY: f64 = 1e-30;

    let [x, y, z] = *pos;
    let [vx, vy, vz] = *vel;
    let rxy_sq = x * x + y * y;
    let r_sq = rxy_sq + z * z;
    let r = r_sq.sqrt();

    if r < TINY {
        return SphericalState {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_km: 0.0,
            lon_speed: 0.0,
            lat_speed: 0.0,
            distance_speed: 0.0,
        };
    }

    let lon = y.atan2(x).rem_euclid(TAU);
    let lat = (z / r).asin();
    let radial = (x * vx + y * vy + z * vz) / r;

    let (lon_rate, lat_rate) = if rxy_sq < TINY {
        (0.0, 0.0)
    } else {
        let rxy = rxy_sq.sqrt();
        (
            (x * vy - y * vx) / rxy_sq,
            (vz * rxy_sq - z * (x * vx + y * vy)) / (r_sq * rxy),
        )
    };

    SphericalState {
        // rem_euclid can round up to exactly TAU for tiny negative angles.
        lon_deg: if lon >= TAU { 0.0 } else { lon.to_degrees() },
        lat_deg: lat.to_degrees(),
        distance_km: r,
        lon_speed: lon_rate.to_degrees() * SECONDS_PER_DAY,
        lat_speed: lat_rate.to_degrees() * SECONDS_PER_DAY,
        distance_speed: radial,
    }
}
