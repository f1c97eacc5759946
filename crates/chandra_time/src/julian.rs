//! Julian Day conversions.
//!
//! Dates use astronomical year numbering (year 0 = 1 BCE). The Gregorian
//! routines are proleptic: the Gregorian rules apply before 1582-10-15 too.
//!
//! Algorithm after Meeus, *Astronomical Algorithms*, ch. 7, with the
//! floor terms evaluated in integer arithmetic.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Proleptic Gregorian calendar date to Julian Date.
///
/// `day` may carry a fraction: `1.5` is noon on the first of the month.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_year_start(year, month);
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    day_number(y, m, b, day)
}

/// Julian calendar date to Julian Date.
pub fn julian_calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_year_start(year, month);
    day_number(y, m, 0, day)
}

/// Julian Date to proleptic Gregorian `(year, month, day_with_fraction)`.
///
/// Exact inverse of [`calendar_to_jd`] for `jd >= 0`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let z = z as i64;

    let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
    let a = z + 1 + alpha - alpha.div_euclid(4);
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (1461 * c).div_euclid(4);
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d - (306_001 * e).div_euclid(10_000)) as f64 + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year as i32, month as u32, day)
}

/// Julian Date to seconds past J2000.0 in the same time scale.
pub fn jd_to_tdb_seconds(jd: f64) -> f64 {
    (jd - J2000_JD) * SECONDS_PER_DAY
}

/// Seconds past J2000.0 to Julian Date.
pub fn tdb_seconds_to_jd(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY + J2000_JD
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// January and February count as months 13 and 14 of the previous year.
fn shift_year_start(year: i32, month: u32) -> (i64, i64) {
    let (y, m) = (i64::from(year), i64::from(month));
    if m <= 2 { (y - 1, m + 12) } else { (y, m) }
}

fn day_number(y: i64, m: i64, b: i64, day: f64) -> f64 {
    // floor(365.25 (y + 4716)) + floor(30.6001 (m + 1)) + b - 1524
    let whole = (1461 * (y + 4716)).div_euclid(4) + (306_001 * (m + 1)).div_euclid(10_000) + b - 1524;
    whole as f64 - 0.5 + day
}
