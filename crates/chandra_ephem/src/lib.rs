//! Ephemeris oracle backed by a JPL SPK kernel.
//!
//! [`JplOracle`] answers [`EphemerisOracle`] queries for the Moon from a
//! DE-series kernel. The geocentric state is rotated from ICRF to the
//! ecliptic, precessed to the mean ecliptic of date and shifted by the
//! nutation in longitude, giving true ecliptic coordinates of date.
//! Positions are geometric.
//!
//! Sidereal longitudes subtract the true Lahiri ayanamsha from the same
//! tropical value, so `sidereal = tropical - ayanamsa (mod 360)` holds to
//! rounding.

pub mod ayanamsha;
pub mod config;

use std::path::{Path, PathBuf};

use chandra_core::{Body, EphemerisOracle, OracleError, StateVector, Zodiac, normalize_360};
use chandra_frames::{
    cartesian_state_to_spherical_state, general_precession_rate_deg_per_day, icrf_to_ecliptic,
    nutation_longitude_arcsec, precess_ecliptic_j2000_to_date,
};
use chandra_time::{SECONDS_PER_DAY, jd_to_centuries, jd_to_tdb_seconds};
use jpl_kernel::{KernelError, SpkKernel};
use tracing::debug;

pub use ayanamsha::{LAHIRI_J2000_DEG, lahiri_mean_deg, lahiri_true_deg};
pub use config::{DEFAULT_EPHEMERIS_DIR, DEFAULT_SPK_FILE, OracleConfig};

/// NAIF code of the Earth.
const EARTH: i32 = 399;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Oracle over one loaded SPK kernel. Immutable after construction.
#[derive(Debug, Clone)]
pub struct JplOracle {
    kernel: SpkKernel,
    spk_path: PathBuf,
}

impl JplOracle {
    /// Validate `config` and load its kernel.
    pub fn open(config: &OracleConfig) -> Result<Self, OracleError> {
        config.validate()?;
        let spk_path = config.spk_path();
        if !spk_path.is_file() {
            return Err(OracleError::DataUnavailable(format!(
                "SPK kernel not found at {}",
                spk_path.display()
            )));
        }
        let kernel = SpkKernel::load(&spk_path)
            .map_err(|e| OracleError::DataUnavailable(format!("{}: {e}", spk_path.display())))?;
        debug!(
            path = %spk_path.display(),
            segments = kernel.segments().len(),
            "opened ephemeris oracle"
        );
        Ok(Self { kernel, spk_path })
    }

    /// Wrap a kernel that is already loaded.
    pub fn from_kernel(kernel: SpkKernel) -> Self {
        Self {
            kernel,
            spk_path: PathBuf::new(),
        }
    }

    /// Path the kernel was loaded from (empty for [`JplOracle::from_kernel`]).
    pub fn spk_path(&self) -> &Path {
        &self.spk_path
    }

    pub fn kernel(&self) -> &SpkKernel {
        &self.kernel
    }

    /// Geocentric position and velocity in ICRF (km, km/s).
    fn geocentric_icrf(&self, body: Body, julian_day: f64) -> Result<[f64; 6], OracleError> {
        let epoch = jd_to_tdb_seconds(julian_day);
        let kernel_error = |e: KernelError| match e {
            KernelError::EpochOutOfRange { .. } => OracleError::EpochOutOfRange { julian_day },
            other => OracleError::Computation(other.to_string()),
        };
        let target = self
            .kernel
            .resolve_to_ssb(body.code(), epoch)
            .map_err(kernel_error)?;
        let earth = self
            .kernel
            .resolve_to_ssb(EARTH, epoch)
            .map_err(kernel_error)?;
        let mut out = [0.0; 6];
        for (k, v) in out.iter_mut().enumerate() {
            *v = target[k] - earth[k];
        }
        Ok(out)
    }

    /// True ecliptic state of date, longitude in [0, 360).
    fn tropical_state(&self, body: Body, julian_day: f64) -> Result<StateVector, OracleError> {
        let geo = self.geocentric_icrf(body, julian_day)?;
        let t = jd_to_centuries(julian_day);

        let pos = precess_ecliptic_j2000_to_date(&icrf_to_ecliptic(&[geo[0], geo[1], geo[2]]), t);
        let vel = precess_ecliptic_j2000_to_date(&icrf_to_ecliptic(&[geo[3], geo[4], geo[5]]), t);
        let s = cartesian_state_to_spherical_state(&pos, &vel);

        let dpsi_deg = nutation_longitude_arcsec(t) / 3600.0;
        Ok(StateVector {
            longitude_deg: normalize_360(s.lon_deg + dpsi_deg),
            latitude_deg: s.lat_deg,
            distance_au: s.distance_km / AU_KM,
            // The equinox of date regresses, adding p_A's rate to longitudes.
            longitude_speed: s.lon_speed + general_precession_rate_deg_per_day(t),
            latitude_speed: s.lat_speed,
            distance_speed: s.distance_speed * SECONDS_PER_DAY / AU_KM,
        })
    }
}

impl EphemerisOracle for JplOracle {
    fn query(
        &self,
        julian_day: f64,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<StateVector, OracleError> {
        if !julian_day.is_finite() {
            return Err(OracleError::Computation(format!(
                "non-finite julian day {julian_day}"
            )));
        }
        let tropical = self.tropical_state(body, julian_day)?;
        let state = match zodiac {
            Zodiac::Tropical => tropical,
            Zodiac::Sidereal => {
                let t = jd_to_centuries(julian_day);
                StateVector {
                    longitude_deg: normalize_360(tropical.longitude_deg - lahiri_true_deg(t)),
                    longitude_speed: tropical.longitude_speed
                        - general_precession_rate_deg_per_day(t),
                    ..tropical
                }
            }
        };
        debug!(
            julian_day,
            body = body.name(),
            ?zodiac,
            longitude = state.longitude_deg,
            "oracle query"
        );
        Ok(state)
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, OracleError> {
        if !julian_day.is_finite() {
            return Err(OracleError::Computation(format!(
                "non-finite julian day {julian_day}"
            )));
        }
        Ok(lahiri_true_deg(jd_to_centuries(julian_day)))
    }
}
