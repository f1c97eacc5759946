//! Nakshatra (lunar mansion) lookup on the 27-fold division.
//!
//! The sidereal ecliptic is split into 27 equal mansions of 13°20′, each
//! of four padas of 3°20′. Mansion `k` starts at the f64 value
//! `k as f64 * NAKSHATRA_SPAN`; a longitude equal to that value belongs to
//! mansion `k` with offset zero.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Number of nakshatras.
pub const NAKSHATRA_COUNT: u8 = 27;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All nakshatras in zodiacal order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Transliterated Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based position in [`ALL_NAKSHATRAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(usize::from(index)).copied()
    }

    /// Start of this nakshatra in sidereal degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * NAKSHATRA_SPAN
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees into the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Degrees into the pada, [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Index and offset of the nakshatra containing `sidereal_lon_deg`.
///
/// Inputs outside [0, 360) are normalized first. The quotient
/// `lon / NAKSHATRA_SPAN` can round across a boundary, so the index is
/// checked against the boundary values themselves.
pub fn nakshatra_index(sidereal_lon_deg: f64) -> (u8, f64) {
    let lon = normalize_360(sidereal_lon_deg);
    let last = NAKSHATRA_COUNT - 1;
    let mut idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(last);
    while idx < last && lon >= f64::from(idx + 1) * NAKSHATRA_SPAN {
        idx += 1;
    }
    while idx > 0 && lon < f64::from(idx) * NAKSHATRA_SPAN {
        idx -= 1;
    }
    let offset = (lon - f64::from(idx) * NAKSHATRA_SPAN).clamp(0.0, largest_below(NAKSHATRA_SPAN));
    (idx, offset)
}

/// Full nakshatra and pada lookup from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let (nakshatra_index, degrees_in_nakshatra) = nakshatra_index(sidereal_lon_deg);
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = (degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[usize::from(nakshatra_index)],
        nakshatra_index,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// Largest f64 strictly below a positive finite `x`.
fn largest_below(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_not_truncated() {
        assert_eq!(NAKSHATRA_SPAN, 360.0 / 27.0);
        assert!(NAKSHATRA_SPAN > 13.333333);
    }

    #[test]
    fn zero_is_ashwini_start() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.degrees_in_nakshatra, 0.0);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn last_degree_is_revati() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn padas_split_a_mansion() {
        let start = Nakshatra::Rohini.start_deg();
        for (k, expected) in [1u8, 2, 3, 4].into_iter().enumerate() {
            let lon = start + (k as f64 + 0.5) * PADA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra, Nakshatra::Rohini);
            assert_eq!(info.pada, expected);
            assert!((info.degrees_in_pada - 0.5 * PADA_SPAN).abs() < 1e-9);
        }
    }

    #[test]
    fn index_roundtrip() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(usize::from(n.index()), i);
            assert_eq!(Nakshatra::from_index(n.index()), Some(*n));
        }
        assert_eq!(Nakshatra::from_index(27), None);
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<_> = ALL_NAKSHATRAS.iter().map(|n| n.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 27);
        assert_eq!(Nakshatra::PurvaBhadrapada.to_string(), "Purva Bhadrapada");
    }

    #[test]
    fn largest_below_is_adjacent() {
        let x = NAKSHATRA_SPAN;
        let below = largest_below(x);
        assert!(below < x);
        assert_eq!(f64::from_bits(below.to_bits() + 1), x);
    }
}
