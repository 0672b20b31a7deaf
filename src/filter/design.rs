//! FIR lowpass design matching `scipy.signal.firwin`.
//!
//! For `N` taps at cutoff `f_c` Hz and sampling rate `fs`:
//!   • normalised cutoff  fc = f_c / (fs / 2)
//!   • ideal response     h[n] = fc · sinc(fc · (n − (N−1)/2))
//!   • Hamming window, then scaled so Σ h = 1 (unit DC gain)
use std::f64::consts::PI;

use crate::config::FilterSpec;
use crate::error::DesignError;

/// Design the lowpass described by `spec`.
///
/// Validates `spec` first, so an invalid configuration never produces
/// coefficients.
pub fn design_lowpass(spec: &FilterSpec) -> Result<Vec<f64>, DesignError> {
    let h = firwin(spec.num_taps, spec.cutoff, spec.sample_rate)?;
    log::debug!(
        "firwin taps={} cutoff={} Hz fs={} Hz normalized={:.4} dc_gain={:.9}",
        spec.num_taps,
        spec.cutoff,
        spec.sample_rate,
        spec.normalized_cutoff(),
        h.iter().sum::<f64>()
    );
    Ok(h)
}

/// Hamming-windowed sinc lowpass with `n` taps.
///
/// `cutoff_hz` is the −6 dB point and must lie strictly between 0 and
/// `sfreq / 2`.  Odd and even `n` are both accepted; the result is always
/// symmetric (linear phase).
pub fn firwin(n: usize, cutoff_hz: f64, sfreq: f64) -> Result<Vec<f64>, DesignError> {
    FilterSpec { sample_rate: sfreq, num_taps: n, cutoff: cutoff_hz }.validate()?;

    let alpha = (n - 1) as f64 / 2.0;
    let nyq = sfreq / 2.0;
    let fc = cutoff_hz / nyq; // normalised (0, 1)

    let win = hamming(n);

    let mut h: Vec<f64> = win
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let x = i as f64 - alpha;
            // f(x) = sin(π·fc·x) / (π·x);  lim_{x→0} f(x) = fc
            let sinc = if x == 0.0 { fc } else { (PI * fc * x).sin() / (PI * x) };
            sinc * w
        })
        .collect();

    let s: f64 = h.iter().sum();
    h.iter_mut().for_each(|v| *v /= s);

    Ok(h)
}

/// Symmetric Hamming window of length `n`.
///
/// `n == 1` yields `[1.0]`, `n == 0` an empty window.
pub fn hamming(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / (n - 1) as f64).cos())
        .collect()
}
