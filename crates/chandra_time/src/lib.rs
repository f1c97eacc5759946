//! Civil time and Julian Day handling.
//!
//! This crate provides:
//! - `CivilTimestamp`, a validated calendar date and time of day
//! - Julian Date conversions for the proleptic Gregorian and Julian calendars
//! - Seconds-past-J2000 and Julian-century helpers

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilTimestamp, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
    jd_to_tdb_seconds, julian_calendar_to_jd, tdb_seconds_to_jd,
};
