//! FIR lowpass design and frequency-response evaluation.
//!
//! - [`design`]: Hamming-windowed sinc lowpass, matching
//!   `scipy.signal.firwin(numtaps, cutoff, fs=fs)`.
//! - [`response`]: evenly spaced DTFT samples on `[0, nyquist)`, matching
//!   `scipy.signal.freqz(b, worN=n, fs=fs)`.

pub mod design;
pub mod response;

pub use design::{design_lowpass, firwin, hamming};
pub use response::{freqz, FrequencyResponse};
