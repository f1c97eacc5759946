//! Oracle configuration.

use std::path::{Path, PathBuf};

use chandra_core::OracleError;

/// Default directory holding ephemeris kernels, relative to the working
/// directory.
pub const DEFAULT_EPHEMERIS_DIR: &str = "resources/ephe";

/// Default SPK kernel file name.
pub const DEFAULT_SPK_FILE: &str = "de442s.bsp";

/// Where the oracle finds its kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub ephemeris_dir: PathBuf,
    /// Kernel file, resolved against `ephemeris_dir` unless absolute.
    pub spk_file: PathBuf,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            ephemeris_dir: PathBuf::from(DEFAULT_EPHEMERIS_DIR),
            spk_file: PathBuf::from(DEFAULT_SPK_FILE),
        }
    }
}

impl OracleConfig {
    pub fn new(ephemeris_dir: impl Into<PathBuf>, spk_file: impl Into<PathBuf>) -> Self {
        Self {
            ephemeris_dir: ephemeris_dir.into(),
            spk_file: spk_file.into(),
        }
    }

    /// Full path of the SPK kernel.
    pub fn spk_path(&self) -> PathBuf {
        if self.spk_file.is_absolute() {
            self.spk_file.clone()
        } else {
            self.ephemeris_dir.join(&self.spk_file)
        }
    }

    pub fn validate(&self) -> Result<(), OracleError> {
        if is_empty(&self.ephemeris_dir) {
            return Err(OracleError::InvalidConfig("ephemeris_dir must not be empty"));
        }
        if is_empty(&self.spk_file) {
            return Err(OracleError::InvalidConfig("spk_file must not be empty"));
        }
        Ok(())
    }
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
