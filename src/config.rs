//! Filter and pipeline configuration.
//!
//! [`FilterSpec`] describes the lowpass itself; [`DesignConfig`] wraps it with
//! everything the pipeline needs to print and plot the result.  Both defaults
//! reproduce the fixed constants of the `generate_filter` binary.

use std::path::PathBuf;

use crate::error::DesignError;

/// Default sampling rate in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;

/// Default number of taps.
///
/// More taps give a sharper transition band at a higher cost per sample.
pub const DEFAULT_NUM_TAPS: usize = 41;

/// Default cutoff in Hz: the start of the band we want to attenuate.
pub const DEFAULT_CUTOFF: f64 = 9_000.0;

/// Default number of frequency bins, matching `scipy.signal.freqz`.
pub const DEFAULT_N_FREQS: usize = 512;

/// Fractional digits in the printed coefficient listing.
pub const DEFAULT_PRECISION: usize = 7;

/// Name of the plot written to the working directory.
pub const DEFAULT_OUTPUT: &str = "filter_frequency_response.png";

/// Immutable description of a windowed-sinc lowpass.
///
/// ```
/// use lowpass_design::FilterSpec;
///
/// let spec = FilterSpec::default();
/// assert_eq!(spec.num_taps, 41);
/// assert_eq!(spec.nyquist(), 22_050.0);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    /// Sampling rate in Hz.
    pub sample_rate: f64,
    /// Number of coefficients (taps).
    pub num_taps: usize,
    /// Cutoff frequency in Hz, the −6 dB point of the designed filter.
    pub cutoff: f64,
}

impl Default for FilterSpec {
    /// 44.1 kHz · 41 taps · 9 kHz cutoff.
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            num_taps: DEFAULT_NUM_TAPS,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl FilterSpec {
    /// Half the sampling rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Cutoff as a fraction of the sampling rate (`cutoff / fs`).
    ///
    /// At the defaults this is ≈ 0.204.
    pub fn normalized_cutoff(&self) -> f64 {
        self.cutoff / self.sample_rate
    }

    /// Check every invariant the design routine relies on.
    ///
    /// Order of checks: taps, sampling rate, cutoff.  The first violation is
    /// returned.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.num_taps == 0 {
            return Err(DesignError::NoTaps);
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(DesignError::InvalidSampleRate(self.sample_rate));
        }
        let nyquist = self.nyquist();
        if !self.cutoff.is_finite() || self.cutoff <= 0.0 || self.cutoff >= nyquist {
            return Err(DesignError::InvalidCutoff { cutoff: self.cutoff, nyquist });
        }
        Ok(())
    }
}

/// Everything the design-print-plot pipeline needs.
///
/// All fields are `pub`, so overrides use struct-update syntax:
///
/// ```
/// use lowpass_design::{DesignConfig, FilterSpec};
///
/// let cfg = DesignConfig {
///     spec: FilterSpec { num_taps: 101, ..FilterSpec::default() },
///     output: "wide.png".into(),
///     ..DesignConfig::default()
/// };
/// assert_eq!(cfg.n_freqs, 512);
/// ```
#[derive(Debug, Clone)]
pub struct DesignConfig {
    /// The filter to design.
    pub spec: FilterSpec,

    /// Number of evenly spaced bins in `[0, nyquist)` for the response.
    ///
    /// Default: `512`.
    pub n_freqs: usize,

    /// Fractional digits per printed coefficient.
    ///
    /// Default: `7`.
    pub precision: usize,

    /// Plot destination.  An existing file is overwritten.
    ///
    /// Default: `filter_frequency_response.png` (relative to the working
    /// directory).
    pub output: PathBuf,

    /// Plot size in pixels `(width, height)`.
    ///
    /// Default: `(640, 480)`.
    pub image_size: (u32, u32),
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            spec: FilterSpec::default(),
            n_freqs: DEFAULT_N_FREQS,
            precision: DEFAULT_PRECISION,
            output: PathBuf::from(DEFAULT_OUTPUT),
            image_size: (640, 480),
        }
    }
}

impl DesignConfig {
    /// Validate the filter and the response grid.
    pub fn validate(&self) -> Result<(), DesignError> {
        self.spec.validate()?;
        if self.n_freqs == 0 {
            return Err(DesignError::NoFrequencyBins);
        }
        Ok(())
    }
}
