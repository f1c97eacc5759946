//! The ephemeris oracle contract.
//!
//! An oracle is constructed once with its data path and ayanamsa fixed,
//! then answers position and ayanamsa queries for a Julian Day. The
//! pipeline only ever sees this trait, so tests substitute fixtures.

use crate::error::OracleError;

/// Bodies the oracle can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Body {
    Moon,
}

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Moon => 301,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Moon => "Moon",
        }
    }
}

/// Zero point of ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    /// Measured from the true equinox of date.
    Tropical,
    /// Tropical longitude minus the oracle's ayanamsa.
    Sidereal,
}

/// Ecliptic position and rates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Longitude rate in deg/day.
    pub longitude_speed: f64,
    /// Latitude rate in deg/day.
    pub latitude_speed: f64,
    /// Distance rate in AU/day.
    pub distance_speed: f64,
}

impl StateVector {
    /// `[lon, lat, dist, lon_speed, lat_speed, dist_speed]`.
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.longitude_deg,
            self.latitude_deg,
            self.distance_au,
            self.longitude_speed,
            self.latitude_speed,
            self.distance_speed,
        ]
    }

    pub const fn from_array(v: [f64; 6]) -> Self {
        Self {
            longitude_deg: v[0],
            latitude_deg: v[1],
            distance_au: v[2],
            longitude_speed: v[3],
            latitude_speed: v[4],
            distance_speed: v[5],
        }
    }
}

/// Source of geocentric positions and the sidereal offset.
///
/// `julian_day` is in the oracle's own time scale.
pub trait EphemerisOracle {
    /// Position of `body` at `julian_day` in the given zodiac.
    fn query(
        &self,
        julian_day: f64,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<StateVector, OracleError>;

    /// Ayanamsa in degrees at `julian_day`.
    fn ayanamsa(&self, julian_day: f64) -> Result<f64, OracleError>;
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for &T {
    fn query(
        &self,
        julian_day: f64,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<StateVector, OracleError> {
        (**self).query(julian_day, body, zodiac)
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, OracleError> {
        (**self).ayanamsa(julian_day)
    }
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for Box<T> {
    fn query(
        &self,
        julian_day: f64,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<StateVector, OracleError> {
        (**self).query(julian_day, body, zodiac)
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, OracleError> {
        (**self).ayanamsa(julian_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_code() {
        assert_eq!(Body::Moon.code(), 301);
        assert_eq!(Body::Moon.name(), "Moon");
    }

    #[test]
    fn array_layout() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let s = StateVector::from_array(v);
        assert_eq!(s.longitude_deg, 1.0);
        assert_eq!(s.distance_speed, 6.0);
        assert_eq!(s.as_array(), v);
    }
}
