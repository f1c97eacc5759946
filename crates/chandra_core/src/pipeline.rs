//! End-to-end derivation: civil time → Julian Day → sidereal position →
//! nakshatra report.

use chandra_time::CivilTimestamp;
use tracing::debug;

use crate::error::{PipelineError, ResolveError};
use crate::oracle::EphemerisOracle;
use crate::report::NakshatraReport;
use crate::resolver::resolve;

/// Build the report for a validated civil timestamp.
pub fn compute_report<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    timestamp: &CivilTimestamp,
) -> Result<NakshatraReport, PipelineError> {
    let julian_day = timestamp.to_julian_day();
    debug!(
        %timestamp,
        day_fraction = timestamp.day_fraction(),
        julian_day,
        "converted civil time"
    );
    Ok(report_for_julian_day(oracle, julian_day)?)
}

/// Build the report for a validated set of calendar fields.
pub fn compute_report_from_fields<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    fields: [i64; 6],
) -> Result<NakshatraReport, PipelineError> {
    let timestamp = civil_from_fields(fields)?;
    compute_report(oracle, &timestamp)
}

/// Build the report for an instant already expressed as a Julian Day.
pub fn report_for_julian_day<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    julian_day: f64,
) -> Result<NakshatraReport, ResolveError> {
    let position = resolve(oracle, julian_day)?;
    let report = NakshatraReport::from_position(&position);
    debug!(
        index = report.nakshatra_index(),
        nakshatra = report.nakshatra.nakshatra.name(),
        offset = report.degree_within_nakshatra(),
        "indexed nakshatra"
    );
    Ok(report)
}

/// Validate six integers as `YEAR MONTH DAY HOUR MINUTE SECOND`.
pub fn civil_from_fields(fields: [i64; 6]) -> Result<CivilTimestamp, PipelineError> {
    let [year, month, day, hour, minute, second] = fields;
    let year = i32::try_from(year).map_err(|_| out_of_range("year", year))?;
    let unsigned = |name: &'static str, v: i64| u32::try_from(v).map_err(|_| out_of_range(name, v));
    Ok(CivilTimestamp::new(
        year,
        unsigned("month", month)?,
        unsigned("day", day)?,
        unsigned("hour", hour)?,
        unsigned("minute", minute)?,
        unsigned("second", second)?,
    )?)
}

fn out_of_range(name: &str, value: i64) -> PipelineError {
    PipelineError::Time(chandra_time::TimeError::InvalidCivilTime(format!(
        "{name} {value} is out of range"
    )))
}
