//! Deterministic oracle for pipeline tests.

#![allow(dead_code)]

use std::cell::RefCell;

use chandra_core::{Body, EphemerisOracle, OracleError, StateVector, Zodiac};

/// Which oracle entry point a fixture should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Sidereal,
    Tropical,
    Ayanamsa,
}

/// Returns a tropical longitude that advances 13.176° per day from a fixed
/// epoch and an ayanamsa that grows linearly, so sidereal = tropical -
/// ayanamsa by construction.
pub struct FixtureOracle {
    pub fail_on: FailOn,
    pub tropical_at_epoch: f64,
    pub calls: RefCell<Vec<&'static str>>,
}

pub const EPOCH_JD: f64 = 2_451_545.0;
pub const MOON_DEG_PER_DAY: f64 = 13.176_358;

impl FixtureOracle {
    pub fn new() -> Self {
        Self {
            fail_on: FailOn::Nothing,
            tropical_at_epoch: 218.316,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn tropical(&self, jd: f64) -> f64 {
        (self.tropical_at_epoch + MOON_DEG_PER_DAY * (jd - EPOCH_JD)).rem_euclid(360.0)
    }

    fn lahiri(&self, jd: f64) -> f64 {
        23.857_092 + 1.396_971 * (jd - EPOCH_JD) / 36_525.0
    }
}

impl EphemerisOracle for FixtureOracle {
    fn query(
        &self,
        julian_day: f64,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<StateVector, OracleError> {
        assert_eq!(body, Body::Moon);
        let lon = match zodiac {
            Zodiac::Tropical => {
                self.calls.borrow_mut().push("tropical");
                if self.fail_on == FailOn::Tropical {
                    return Err(OracleError::Computation("fixture tropical failure".into()));
                }
                self.tropical(julian_day)
            }
            Zodiac::Sidereal => {
                self.calls.borrow_mut().push("sidereal");
                if self.fail_on == FailOn::Sidereal {
                    return Err(OracleError::DataUnavailable(
                        "fixture/ephe/de442s.bsp: No such file or directory".into(),
                    ));
                }
                (self.tropical(julian_day) - self.lahiri(julian_day)).rem_euclid(360.0)
            }
        };
        Ok(StateVector::from_array([
            lon,
            1.5,
            0.002_57,
            MOON_DEG_PER_DAY,
            0.01,
            0.0,
        ]))
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, OracleError> {
        self.calls.borrow_mut().push("ayanamsa");
        if self.fail_on == FailOn::Ayanamsa {
            return Err(OracleError::EpochOutOfRange { julian_day });
        }
        Ok(self.lahiri(julian_day))
    }
}

/// Oracle that returns one fixed longitude in every zodiac.
pub struct ConstantOracle {
    pub sidereal: f64,
    pub tropical: f64,
    pub ayanamsa: f64,
}

impl EphemerisOracle for ConstantOracle {
    fn query(&self, _: f64, _: Body, zodiac: Zodiac) -> Result<StateVector, OracleError> {
        let lon = match zodiac {
            Zodiac::Tropical => self.tropical,
            Zodiac::Sidereal => self.sidereal,
        };
        Ok(StateVector::from_array([lon, 0.0, 0.0026, 13.0, 0.0, 0.0]))
    }

    fn ayanamsa(&self, _: f64) -> Result<f64, OracleError> {
        Ok(self.ayanamsa)
    }
}
