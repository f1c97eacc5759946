//! `KEY=value` rendering of a derivation result.
//!
//! Floats use Rust's shortest round-trip form (`{:?}`), which always carries
//! a decimal point or an exponent, so consumers can tell them from integers.

use std::fmt::Write as _;

use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::resolver::SiderealPosition;

/// Keys of the standard report, in output order.
pub const REPORT_KEYS: [&str; 6] = [
    "JULIAN_DAY",
    "SIDEREAL_LONGITUDE",
    "TROPICAL_LONGITUDE",
    "AYANAMSA",
    "NAKSHATRA_INDEX",
    "DEGREE_WITHIN_NAKSHATRA",
];

/// Keys appended by the detailed report.
pub const DETAIL_KEYS: [&str; 2] = ["NAKSHATRA_NAME", "PADA"];

/// Everything one invocation reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraReport {
    pub julian_day: f64,
    pub sidereal_longitude: f64,
    pub tropical_longitude: f64,
    pub ayanamsa: f64,
    pub nakshatra: NakshatraInfo,
}

impl NakshatraReport {
    pub fn from_position(position: &SiderealPosition) -> Self {
        Self {
            julian_day: position.julian_day,
            sidereal_longitude: position.sidereal_longitude(),
            tropical_longitude: position.tropical_longitude(),
            ayanamsa: position.ayanamsa,
            nakshatra: nakshatra_from_longitude(position.sidereal_longitude()),
        }
    }

    pub fn nakshatra_index(&self) -> u8 {
        self.nakshatra.nakshatra_index
    }

    pub fn degree_within_nakshatra(&self) -> f64 {
        self.nakshatra.degrees_in_nakshatra
    }

    /// Key/value pairs in output order; `detail` appends name and pada.
    pub fn fields(&self, detail: bool) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (REPORT_KEYS[0], format!("{:?}", self.julian_day)),
            (REPORT_KEYS[1], format!("{:?}", self.sidereal_longitude)),
            (REPORT_KEYS[2], format!("{:?}", self.tropical_longitude)),
            (REPORT_KEYS[3], format!("{:?}", self.ayanamsa)),
            (REPORT_KEYS[4], self.nakshatra_index().to_string()),
            (REPORT_KEYS[5], format!("{:?}", self.degree_within_nakshatra())),
        ];
        if detail {
            fields.push((DETAIL_KEYS[0], self.nakshatra.nakshatra.name().to_string()));
            fields.push((DETAIL_KEYS[1], self.nakshatra.pada.to_string()));
        }
        fields
    }

    /// One `KEY=value` line per field, each terminated by `\n`.
    pub fn render(&self, detail: bool) -> String {
        let mut out = String::new();
        for (key, value) in self.fields(detail) {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{key}={value}");
        }
        out
    }
}

impl std::fmt::Display for NakshatraReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}
