//! Error types for kernel loading and evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading a DAF/SPK file or evaluating one of its segments.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KernelError {
    /// I/O failure while reading the kernel file.
    Io(String),
    /// The file is not a well-formed DAF/SPK container.
    InvalidFormat(String),
    /// Segment uses an SPK data type this reader does not evaluate.
    UnsupportedDataType { target: i32, data_type: i32 },
    /// No segment links `target` to `center`.
    SegmentNotFound { target: i32, center: i32 },
    /// A segment exists but does not cover the requested epoch.
    EpochOutOfRange {
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    },
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "kernel I/O error: {msg}"),
            Self::InvalidFormat(msg) => write!(f, "invalid SPK file: {msg}"),
            Self::UnsupportedDataType { target, data_type } => write!(
                f,
                "unsupported SPK data type {data_type} for body {target}"
            ),
            Self::SegmentNotFound { target, center } => {
                write!(f, "no SPK segment for body {target} relative to {center}")
            }
            Self::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            } => write!(
                f,
                "epoch {epoch_tdb_s} s past J2000 outside kernel coverage for body {target} relative to {center}"
            ),
        }
    }
}

impl Error for KernelError {}

impl From<std::io::Error> for KernelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
