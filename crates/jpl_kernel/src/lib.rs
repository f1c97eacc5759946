//! JPL SPK kernel reader.
//!
//! Loads a binary SPK file (DAF container) and evaluates its Type 2
//! (Chebyshev position-only) segments. Positions are in km and velocities
//! in km/s, in the segment's reference frame (J2000/ICRF for the DE series).
//!
//! Epochs are TDB seconds past J2000.0.

pub mod chebyshev;
pub mod daf;
pub mod error;

use std::path::Path;

use tracing::debug;

pub use daf::{DafFile, Endianness, FileRecord};
pub use error::KernelError;

/// NAIF code of the solar system barycenter.
pub const SSB: i32 = 0;

/// Descriptor of one SPK segment, decoded from its DAF summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkSegment {
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    /// Coverage start, TDB seconds past J2000.
    pub start_epoch: f64,
    /// Coverage end, TDB seconds past J2000.
    pub end_epoch: f64,
    /// First word of segment data (1-based).
    pub begin_address: usize,
    /// Last word of segment data (1-based, inclusive).
    pub end_address: usize,
}

impl SpkSegment {
    fn covers(&self, epoch_tdb_s: f64) -> bool {
        epoch_tdb_s >= self.start_epoch && epoch_tdb_s <= self.end_epoch
    }
}

/// Position and velocity of a target relative to a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Type 2 segment trailer: the last four words of the segment data.
#[derive(Debug, Clone, Copy)]
struct Type2Directory {
    init: f64,
    interval: f64,
    record_words: usize,
    record_count: usize,
}

/// A loaded SPK kernel.
#[derive(Clone)]
pub struct SpkKernel {
    daf: DafFile,
    segments: Vec<SpkSegment>,
}

impl std::fmt::Debug for SpkKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpkKernel")
            .field("internal_name", &self.daf.record().internal_name)
            .field("segments", &self.segments.len())
            .finish()
    }
}

impl SpkKernel {
    /// Read and index an SPK file.
    pub fn load(path: &Path) -> Result<Self, KernelError> {
        let bytes = std::fs::read(path)
            .map_err(|e| KernelError::Io(format!("{}: {e}", path.display())))?;
        let kernel = Self::from_bytes(bytes)?;
        debug!(
            path = %path.display(),
            segments = kernel.segments.len(),
            "loaded SPK kernel"
        );
        Ok(kernel)
    }

    /// Index an SPK image already held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, KernelError> {
        let daf = DafFile::parse(bytes)?;
        let record = daf.record();
        if record.id_word != "DAF/SPK" && record.id_word != "NAIF/DAF" {
            return Err(KernelError::InvalidFormat(format!(
                "expected an SPK file, found '{}'",
                record.id_word
            )));
        }
        if record.nd != 2 || record.ni != 6 {
            return Err(KernelError::InvalidFormat(format!(
                "SPK summaries must have ND=2, NI=6 (found ND={}, NI={})",
                record.nd, record.ni
            )));
        }

        let segments = daf
            .summaries()?
            .into_iter()
            .map(|s| SpkSegment {
                start_epoch: s.doubles[0],
                end_epoch: s.doubles[1],
                target: s.ints[0],
                center: s.ints[1],
                frame: s.ints[2],
                data_type: s.ints[3],
                begin_address: s.ints[4].max(0) as usize,
                end_address: s.ints[5].max(0) as usize,
            })
            .collect();

        Ok(Self { daf, segments })
    }

    /// All segment descriptors, in file order.
    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    /// Center body of the first segment whose target is `target`.
    pub fn center_for(&self, target: i32) -> Option<i32> {
        self.segments
            .iter()
            .find(|s| s.target == target)
            .map(|s| s.center)
    }

    /// Evaluate `target` relative to `center` at a TDB epoch.
    ///
    /// When several segments match, the last one in the file that covers
    /// the epoch wins (SPK precedence rule).
    pub fn evaluate(
        &self,
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let mut matching = self
            .segments
            .iter()
            .rev()
            .filter(|s| s.target == target && s.center == center)
            .peekable();

        if matching.peek().is_none() {
            return Err(KernelError::SegmentNotFound { target, center });
        }

        let segment = matching
            .find(|s| s.covers(epoch_tdb_s))
            .ok_or(KernelError::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            })?;

        self.evaluate_segment(segment, epoch_tdb_s)
    }

    /// Sum the segment chain from `body` down to the solar system barycenter.
    ///
    /// Returns `[x, y, z, vx, vy, vz]` in km and km/s.
    pub fn resolve_to_ssb(&self, body: i32, epoch_tdb_s: f64) -> Result<[f64; 6], KernelError> {
        let mut code = body;
        let mut state = [0.0f64; 6];
        let mut hops = 0;

        while code != SSB {
            hops += 1;
            if hops > self.segments.len() + 1 {
                return Err(KernelError::InvalidFormat(format!(
                    "segment chain from body {body} contains a cycle"
                )));
            }

            let center = match self.center_for(code) {
                Some(c) => c,
                None => {
                    let bary = planet_body_to_barycenter(code);
                    if bary != code {
                        code = bary;
                        continue;
                    }
                    return Err(KernelError::SegmentNotFound {
                        target: code,
                        center: SSB,
                    });
                }
            };

            let eval = self.evaluate(code, center, epoch_tdb_s)?;
            for k in 0..3 {
                state[k] += eval.position_km[k];
                state[k + 3] += eval.velocity_km_s[k];
            }
            code = center;
        }

        Ok(state)
    }

    fn evaluate_segment(
        &self,
        segment: &SpkSegment,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        if segment.data_type != 2 {
            return Err(KernelError::UnsupportedDataType {
                target: segment.target,
                data_type: segment.data_type,
            });
        }
        if segment.end_address < segment.begin_address + 3 {
            return Err(KernelError::InvalidFormat(format!(
                "segment for body {} is too short",
                segment.target
            )));
        }

        let dir = self.type2_directory(segment)?;
        let raw_index = ((epoch_tdb_s - dir.init) / dir.interval).floor();
        let index = if raw_index < 0.0 {
            0
        } else {
            (raw_index as usize).min(dir.record_count - 1)
        };

        let record = self.daf.words(
            segment.begin_address + index * dir.record_words,
            dir.record_words,
        )?;
        let mid = record[0];
        let radius = record[1];
        if radius <= 0.0 {
            return Err(KernelError::InvalidFormat(format!(
                "non-positive record radius in segment for body {}",
                segment.target
            )));
        }

        let s = (epoch_tdb_s - mid) / radius;
        let n_coeffs = (dir.record_words - 2) / 3;
        let mut position_km = [0.0; 3];
        let mut velocity_km_s = [0.0; 3];
        for axis in 0..3 {
            let start = 2 + axis * n_coeffs;
            let (p, dp_ds) = chebyshev::evaluate_with_rate(&record[start..start + n_coeffs], s);
            position_km[axis] = p;
            velocity_km_s[axis] = dp_ds / radius;
        }

        Ok(SpkEvaluation {
            position_km,
            velocity_km_s,
        })
    }

    fn type2_directory(&self, segment: &SpkSegment) -> Result<Type2Directory, KernelError> {
        let trailer = self.daf.words(segment.end_address - 3, 4)?;
        let (init, interval, rsize, count) = (trailer[0], trailer[1], trailer[2], trailer[3]);

        if !(interval > 0.0 && rsize >= 5.0 && count >= 1.0) {
            return Err(KernelError::InvalidFormat(format!(
                "bad Type 2 directory for body {} (INTLEN={interval}, RSIZE={rsize}, N={count})",
                segment.target
            )));
        }

        let record_words = rsize as usize;
        let record_count = count as usize;
        let records_end = record_words
            .checked_mul(record_count)
            .and_then(|n| n.checked_add(segment.begin_address))
            .and_then(|n| n.checked_add(4));
        let fits = records_end.is_some_and(|end| end <= segment.end_address + 1);
        if (record_words - 2) % 3 != 0 || !fits {
            return Err(KernelError::InvalidFormat(format!(
                "Type 2 records do not fit segment for body {}",
                segment.target
            )));
        }

        Ok(Type2Directory {
            init,
            interval,
            record_words,
            record_count,
        })
    }
}

/// Map a planet body code (x99) to its system barycenter (x).
///
/// Returns the input unchanged for any other code.
pub fn planet_body_to_barycenter(code: i32) -> i32 {
    if (199..=999).contains(&code) && code % 100 == 99 {
        code / 100
    } else {
        code
    }
}
