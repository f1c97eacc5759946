//! DAF (Double precision Array File) container parsing.
//!
//! A DAF is a sequence of 1024-byte records. Record 1 is the file record;
//! summaries live in a doubly linked list of summary records, each followed
//! by a name record. Array data is addressed in 1-based double words.
//!
//! Reference: NAIF DAF Required Reading (public domain, US Government work
//! product).

use crate::error::KernelError;

/// Size of one DAF physical record in bytes.
pub const RECORD_BYTES: usize = 1024;

/// Size of one double word in bytes.
pub const WORD_BYTES: usize = 8;

/// Binary layout declared in the file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// Parsed DAF file record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Identification word, e.g. `DAF/SPK`.
    pub id_word: String,
    /// Number of double components per summary.
    pub nd: usize,
    /// Number of integer components per summary.
    pub ni: usize,
    /// Internal file name.
    pub internal_name: String,
    /// Record number of the first summary record (1-based).
    pub first_summary: usize,
    pub endianness: Endianness,
}

impl FileRecord {
    /// Summary size in double words: `ND + (NI + 1) / 2`.
    pub fn summary_words(&self) -> usize {
        self.nd + self.ni.div_ceil(2)
    }
}

/// One array summary: its double and integer components.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub doubles: Vec<f64>,
    pub ints: Vec<i32>,
}

/// Read-only view over the bytes of a DAF file.
#[derive(Clone)]
pub struct DafFile {
    bytes: Vec<u8>,
    record: FileRecord,
}

impl std::fmt::Debug for DafFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DafFile")
            .field("record", &self.record)
            .field("len_bytes", &self.bytes.len())
            .finish()
    }
}

impl DafFile {
    /// Validate the file record and wrap the bytes.
    pub fn parse(bytes: Vec<u8>) -> Result<Self, KernelError> {
        if bytes.len() < RECORD_BYTES {
            return Err(KernelError::InvalidFormat(format!(
                "file is {} bytes, shorter than one DAF record",
                bytes.len()
            )));
        }

        let id_word = ascii_field(&bytes[0..8]);
        if !id_word.starts_with("DAF/") && id_word != "NAIF/DAF" {
            return Err(KernelError::InvalidFormat(format!(
                "unrecognised identification word '{id_word}'"
            )));
        }

        let endianness = match ascii_field(&bytes[88..96]).as_str() {
            "LTL-IEEE" => Endianness::Little,
            "BIG-IEEE" => Endianness::Big,
            // Pre-1995 files carry no format string and are little-endian on
            // the platforms JPL distributes for.
            "" => Endianness::Little,
            other => {
                return Err(KernelError::InvalidFormat(format!(
                    "unsupported binary format '{other}'"
                )));
            }
        };

        let nd = read_i32(&bytes, 8, endianness);
        let ni = read_i32(&bytes, 12, endianness);
        let first_summary = read_i32(&bytes, 76, endianness);
        if !(0..=124).contains(&nd) || !(2..=250).contains(&ni) || first_summary < 2 {
            return Err(KernelError::InvalidFormat(format!(
                "implausible file record (ND={nd}, NI={ni}, FWARD={first_summary})"
            )));
        }

        let record = FileRecord {
            id_word,
            nd: nd as usize,
            ni: ni as usize,
            internal_name: ascii_field(&bytes[16..76]),
            first_summary: first_summary as usize,
            endianness,
        };

        Ok(Self { bytes, record })
    }

    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    /// Walk the summary record chain and collect every array summary.
    pub fn summaries(&self) -> Result<Vec<Summary>, KernelError> {
        let words = self.record.summary_words();
        let per_record = (RECORD_BYTES / WORD_BYTES - 3) / words;
        let mut out = Vec::new();
        let mut next = self.record.first_summary;
        let mut visited = 0usize;

        while next != 0 {
            visited += 1;
            if visited > self.bytes.len() / RECORD_BYTES {
                return Err(KernelError::InvalidFormat(
                    "summary record chain does not terminate".into(),
                ));
            }

            let base = (next - 1)
                .checked_mul(RECORD_BYTES)
                .filter(|&base| base < self.bytes.len() && self.bytes.len() - base >= RECORD_BYTES)
                .ok_or_else(|| {
                    KernelError::InvalidFormat(format!(
                        "summary record {next} lies past end of file"
                    ))
                })?;

            let control = self.f64_at(base, 3);
            let count = control[2] as usize;
            if count > per_record {
                return Err(KernelError::InvalidFormat(format!(
                    "summary record {next} claims {count} summaries (max {per_record})"
                )));
            }

            for i in 0..count {
                let offset = base + (3 + i * words) * WORD_BYTES;
                out.push(self.summary_at(offset));
            }

            next = control[0] as usize;
        }

        Ok(out)
    }

    /// Read `count` doubles starting at the 1-based word address `address`.
    pub fn words(&self, address: usize, count: usize) -> Result<Vec<f64>, KernelError> {
        if address == 0 {
            return Err(KernelError::InvalidFormat("word address 0".into()));
        }
        let past_end = || {
            KernelError::InvalidFormat(format!(
                "word range of {count} words at {address} lies past end of file"
            ))
        };
        let start = (address - 1).checked_mul(WORD_BYTES).ok_or_else(past_end)?;
        count
            .checked_mul(WORD_BYTES)
            .and_then(|len| start.checked_add(len))
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(past_end)?;
        Ok(self.f64_at(start, count))
    }

    fn summary_at(&self, offset: usize) -> Summary {
        let nd = self.record.nd;
        let ni = self.record.ni;
        let doubles = self.f64_at(offset, nd);
        let int_base = offset + nd * WORD_BYTES;
        let ints = (0..ni)
            .map(|k| read_i32(&self.bytes, int_base + k * 4, self.record.endianness))
            .collect();
        Summary { doubles, ints }
    }

    fn f64_at(&self, offset: usize, count: usize) -> Vec<f64> {
        (0..count)
            .map(|k| read_f64(&self.bytes, offset + k * WORD_BYTES, self.record.endianness))
            .collect()
    }
}

fn ascii_field(raw: &[u8]) -> String {
    raw.iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

fn read_i32(bytes: &[u8], offset: usize, endianness: Endianness) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    match endianness {
        Endianness::Little => i32::from_le_bytes(raw),
        Endianness::Big => i32::from_be_bytes(raw),
    }
}

fn read_f64(bytes: &[u8], offset: usize, endianness: Endianness) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    match endianness {
        Endianness::Little => f64::from_le_bytes(raw),
        Endianness::Big => f64::from_be_bytes(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_record(format: &[u8; 8]) -> Vec<u8> {
        let mut bytes = vec![0u8; RECORD_BYTES];
        bytes[0..8].copy_from_slice(b"DAF/SPK ");
        bytes[8..12].copy_from_slice(&2i32.to_le_bytes());
        bytes[12..16].copy_from_slice(&6i32.to_le_bytes());
        bytes[16..24].copy_from_slice(b"TEST SPK");
        bytes[76..80].copy_from_slice(&2i32.to_le_bytes());
        bytes[88..96].copy_from_slice(format);
        bytes
    }

    #[test]
    fn rejects_short_file() {
        let err = DafFile::parse(vec![0u8; 100]).unwrap_err();
        assert!(matches!(err, KernelError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_foreign_file() {
        let mut bytes = file_record(b"LTL-IEEE");
        bytes[0..8].copy_from_slice(b"PK\x03\x04zip!");
        assert!(DafFile::parse(bytes).is_err());
    }

    #[test]
    fn rejects_vax_format() {
        let bytes = file_record(b"VAX-GFLT");
        let err = DafFile::parse(bytes).unwrap_err();
        assert!(err.to_string().contains("VAX-GFLT"), "{err}");
    }

    #[test]
    fn parses_file_record_fields() {
        let daf = DafFile::parse(file_record(b"LTL-IEEE")).unwrap();
        let rec = daf.record();
        assert_eq!(rec.id_word, "DAF/SPK");
        assert_eq!(rec.nd, 2);
        assert_eq!(rec.ni, 6);
        assert_eq!(rec.summary_words(), 5);
        assert_eq!(rec.internal_name, "TEST SPK");
        assert_eq!(rec.endianness, Endianness::Little);
    }

    #[test]
    fn summary_record_past_end_is_an_error() {
        let daf = DafFile::parse(file_record(b"LTL-IEEE")).unwrap();
        assert!(daf.summaries().is_err());
    }

    #[test]
    fn huge_summary_pointer_is_an_error() {
        let mut bytes = file_record(b"LTL-IEEE");
        bytes.resize(2 * RECORD_BYTES, 0);
        // NEXT pointer of the first summary record.
        bytes[RECORD_BYTES..RECORD_BYTES + 8].copy_from_slice(&1.0e300f64.to_le_bytes());
        let daf = DafFile::parse(bytes).unwrap();
        let err = daf.summaries().unwrap_err();
        assert!(matches!(err, KernelError::InvalidFormat(_)), "{err}");
    }

    #[test]
    fn huge_word_count_is_an_error() {
        let daf = DafFile::parse(file_record(b"LTL-IEEE")).unwrap();
        assert!(matches!(
            daf.words(1, usize::MAX),
            Err(KernelError::InvalidFormat(_))
        ));
        assert!(daf.words(usize::MAX, 1).is_err());
    }

    #[test]
    fn word_address_zero_is_rejected() {
        let daf = DafFile::parse(file_record(b"LTL-IEEE")).unwrap();
        assert!(daf.words(0, 1).is_err());
        assert!(daf.words(1, 1).is_ok());
        assert!(daf.words(128, 2).is_err());
    }
}
