//! Frame conversion helpers for ephemeris computations.
//!
//! Takes ICRF Cartesian states to ecliptic spherical coordinates of date:
//! ICRF → ecliptic J2000 → mean ecliptic and equinox of date (IAU 2006
//! precession) → true equinox (nutation in longitude).

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use nutation::nutation_longitude_arcsec;
pub use obliquity::{OBLIQUITY_J2000_ARCSEC, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD};
pub use precession::{
    ecliptic_node_longitude_arcsec, ecliptic_precession_matrix, general_precession_longitude_arcsec,
    general_precession_longitude_deg, general_precession_rate_deg_per_day,
    inclination_of_ecliptic_arcsec, precess_ecliptic_j2000_to_date,
};
pub use rotation::{ecliptic_to_icrf, icrf_to_ecliptic};
pub use spherical::{SphericalState, cartesian_state_to_spherical_state};

/// Arcseconds per full turn.
pub const ARCSEC_PER_TURN: f64 = 1_296_000.0;

/// Arcseconds to radians.
pub const ARCSEC_TO_RAD: f64 = std::f64::consts::TAU / ARCSEC_PER_TURN;
