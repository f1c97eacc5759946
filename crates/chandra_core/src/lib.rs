//! Lunar nakshatra derivation.
//!
//! Civil time is converted to a Julian Day, the Moon's sidereal and
//! tropical longitudes and the ayanamsa are obtained from an
//! [`EphemerisOracle`], and the sidereal longitude is indexed into one of
//! the 27 nakshatras. The result renders as `KEY=value` lines.
//!
//! The oracle is a trait so that the pipeline can run against a JPL kernel
//! in production and against fixed vectors in tests.

pub mod error;
pub mod nakshatra;
pub mod oracle;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod util;

pub use error::{OracleCall, OracleError, PipelineError, ResolveError};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_COUNT, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use oracle::{Body, EphemerisOracle, StateVector, Zodiac};
pub use pipeline::{civil_from_fields, compute_report, compute_report_from_fields, report_for_julian_day};
pub use report::{DETAIL_KEYS, NakshatraReport, REPORT_KEYS};
pub use resolver::{SiderealPosition, resolve};
pub use util::normalize_360;
