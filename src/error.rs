//! Invalid-parameter errors raised before any coefficient is computed.
use std::error;
use std::fmt;

/// Rejected filter or response parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignError {
    /// `num_taps` was zero.
    NoTaps,
    /// Sampling rate was zero, negative, or not finite.
    InvalidSampleRate(f64),
    /// Cutoff must lie strictly inside `(0, nyquist)`.
    InvalidCutoff { cutoff: f64, nyquist: f64 },
    /// The frequency response was requested on zero bins.
    NoFrequencyBins,
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DesignError::NoTaps => f.write_str("filter must have at least one tap"),
            DesignError::InvalidSampleRate(fs) => {
                write!(f, "invalid sampling rate {fs} Hz (must be finite and > 0)")
            }
            DesignError::InvalidCutoff { cutoff, nyquist } => write!(
                f,
                "invalid cutoff {cutoff} Hz (must satisfy 0 < cutoff < nyquist = {nyquist} Hz)"
            ),
            DesignError::NoFrequencyBins => {
                f.write_str("frequency response needs at least one bin")
            }
        }
    }
}

impl error::Error for DesignError {}
