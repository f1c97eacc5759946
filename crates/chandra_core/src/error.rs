//! Error types for the derivation pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chandra_time::TimeError;

/// Failure reported by an ephemeris oracle.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// Oracle configuration rejected before any data was read.
    InvalidConfig(&'static str),
    /// Ephemeris data file missing or unreadable.
    DataUnavailable(String),
    /// No ephemeris data covers the requested instant.
    EpochOutOfRange { julian_day: f64 },
    /// Data was present but the computation failed.
    Computation(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid oracle config: {msg}"),
            Self::DataUnavailable(msg) => write!(f, "ephemeris data unavailable: {msg}"),
            Self::EpochOutOfRange { julian_day } => {
                write!(f, "julian day {julian_day} is outside the ephemeris range")
            }
            Self::Computation(msg) => write!(f, "ephemeris computation failed: {msg}"),
        }
    }
}

impl Error for OracleError {}

/// Which oracle call a [`ResolveError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleCall {
    Sidereal,
    Tropical,
    Ayanamsa,
}

impl OracleCall {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sidereal => "sidereal",
            Self::Tropical => "tropical",
            Self::Ayanamsa => "ayanamsa",
        }
    }
}

/// Errors from resolving the sidereal position of the Moon.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResolveError {
    /// An oracle call failed. Displays the oracle's message unchanged.
    Oracle { call: OracleCall, source: OracleError },
    /// An oracle call returned NaN or an infinity.
    NonFinite { call: OracleCall, value: f64 },
}

impl ResolveError {
    /// The oracle call that failed.
    pub fn call(&self) -> OracleCall {
        match self {
            Self::Oracle { call, .. } | Self::NonFinite { call, .. } => *call,
        }
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oracle { source, .. } => write!(f, "{source}"),
            Self::NonFinite { call, value } => {
                write!(f, "{} query produced non-finite value {value}", call.name())
            }
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Oracle { source, .. } => Some(source),
            Self::NonFinite { .. } => None,
        }
    }
}

/// Errors from the end-to-end civil time → report pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PipelineError {
    Time(TimeError),
    Resolve(ResolveError),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Resolve(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PipelineError {}

impl From<TimeError> for PipelineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ResolveError> for PipelineError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}
