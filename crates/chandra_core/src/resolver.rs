//! Sidereal position resolution: the three oracle calls for one instant.
//!
//! Calls run in a fixed order (sidereal, tropical, ayanamsa) and the first
//! failure aborts. Nothing is retried and no partial record is produced.

use tracing::debug;

use crate::error::{OracleCall, OracleError, ResolveError};
use crate::oracle::{Body, EphemerisOracle, StateVector, Zodiac};
use crate::util::normalize_360;

/// Moon position in both zodiacs plus the ayanamsa, for one Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPosition {
    pub julian_day: f64,
    pub sidereal: StateVector,
    pub tropical: StateVector,
    /// Ayanamsa in degrees.
    pub ayanamsa: f64,
}

impl SiderealPosition {
    pub fn sidereal_longitude(&self) -> f64 {
        self.sidereal.longitude_deg
    }

    pub fn tropical_longitude(&self) -> f64 {
        self.tropical.longitude_deg
    }
}

/// Query the oracle for the Moon's sidereal and tropical positions and the
/// ayanamsa at `julian_day`.
///
/// Longitudes are normalized to [0, 360). Any oracle failure or non-finite
/// value fails the whole resolution.
pub fn resolve<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    julian_day: f64,
) -> Result<SiderealPosition, ResolveError> {
    let sidereal = query_moon(oracle, julian_day, Zodiac::Sidereal, OracleCall::Sidereal)?;
    let tropical = query_moon(oracle, julian_day, Zodiac::Tropical, OracleCall::Tropical)?;

    let ayanamsa = oracle
        .ayanamsa(julian_day)
        .map_err(|source| oracle_failed(OracleCall::Ayanamsa, source))?;
    ensure_finite(OracleCall::Ayanamsa, ayanamsa)?;

    debug!(
        julian_day,
        sidereal = sidereal.longitude_deg,
        tropical = tropical.longitude_deg,
        ayanamsa,
        "resolved sidereal position"
    );

    Ok(SiderealPosition {
        julian_day,
        sidereal,
        tropical,
        ayanamsa,
    })
}

fn query_moon<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    julian_day: f64,
    zodiac: Zodiac,
    call: OracleCall,
) -> Result<StateVector, ResolveError> {
    let mut state = oracle
        .query(julian_day, Body::Moon, zodiac)
        .map_err(|source| oracle_failed(call, source))?;
    ensure_finite(call, state.longitude_deg)?;
    state.longitude_deg = normalize_360(state.longitude_deg);
    Ok(state)
}

fn oracle_failed(call: OracleCall, source: OracleError) -> ResolveError {
    debug!(call = call.name(), error = %source, "oracle call failed");
    ResolveError::Oracle { call, source }
}

fn ensure_finite(call: OracleCall, value: f64) -> Result<(), ResolveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ResolveError::NonFinite { call, value })
    }
}
