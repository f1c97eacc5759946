//! Civil calendar timestamps with whole-second resolution.
//!
//! A [`CivilTimestamp`] is validated once at construction; every value
//! that exists is a real proleptic Gregorian date and time of day.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Date and time of day, no timezone.
///
/// Fields are read through accessors so the calendar invariant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTimestamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl CivilTimestamp {
    /// Validate and build a timestamp.
    ///
    /// Rejects months outside 1-12, days the month does not have, hours
    /// outside 0-23 and minutes or seconds outside 0-59.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidCivilTime(format!(
                "month {month} is outside 1-12"
            )));
        }
        let last = days_in_month(year, month);
        if day < 1 || day > last {
            return Err(TimeError::InvalidCivilTime(format!(
                "day {day} does not exist in {year:04}-{month:02} (1-{last})"
            )));
        }
        if hour > 23 {
            return Err(TimeError::InvalidCivilTime(format!(
                "hour {hour} is outside 0-23"
            )));
        }
        if minute > 59 {
            return Err(TimeError::InvalidCivilTime(format!(
                "minute {minute} is outside 0-59"
            )));
        }
        if second > 59 {
            return Err(TimeError::InvalidCivilTime(format!(
                "second {second} is outside 0-59"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Time of day in decimal hours, in `[0, 24)`.
    pub fn day_fraction(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / 3600.0
    }

    /// Julian Date of this instant on the proleptic Gregorian calendar.
    pub fn to_julian_day(&self) -> f64 {
        calendar_to_jd(
            self.year,
            self.month,
            f64::from(self.day) + self.day_fraction() / 24.0,
        )
    }
}

impl std::fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Gregorian leap-year rule, applied proleptically.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for other months.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
