//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or converting civil timestamps.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A field is out of range or the date does not exist in the calendar.
    InvalidCivilTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCivilTime(msg) => write!(f, "invalid civil time: {msg}"),
        }
    }
}

impl Error for TimeError {}
