//! Frequency response of an FIR filter.
//!
//! Matches `scipy.signal.freqz(b, worN=n_freqs, fs=fs)`: `n_freqs` bins evenly
//! spaced over `[0, nyquist)`, evaluated as the first half of a zero-padded
//! `2 · n_freqs`-point FFT.  Filters longer than that FFT fall back to the
//! direct DTFT sum.
use std::f64::consts::PI;

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::DesignError;

/// Sampled frequency response: `freqs[k]` (Hz) ↔ `h[k]`.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Bin frequencies in Hz, `k · fs / (2 · n_freqs)`.
    pub freqs: Vec<f64>,
    /// Complex response at each bin.
    pub h: Vec<Complex<f64>>,
}

impl FrequencyResponse {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// `true` when there are no bins.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// `20 · log10(|H|)` per bin.
    ///
    /// No clamping: a bin with `|H| == 0` yields `-inf`.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.h.iter().map(|z| 20.0 * z.norm().log10()).collect()
    }

    /// `(frequency, dB)` pairs, the series drawn by [`crate::plot`].
    pub fn db_points(&self) -> Vec<(f64, f64)> {
        self.freqs.iter().copied().zip(self.magnitude_db()).collect()
    }
}

/// Evaluate the response of taps `b` at `n_freqs` bins for sampling rate `fs`.
pub fn freqz(b: &[f64], n_freqs: usize, fs: f64) -> Result<FrequencyResponse, DesignError> {
    if n_freqs == 0 {
        return Err(DesignError::NoFrequencyBins);
    }
    if !fs.is_finite() || fs <= 0.0 {
        return Err(DesignError::InvalidSampleRate(fs));
    }

    let n_fft = 2 * n_freqs;
    let freqs: Vec<f64> = (0..n_freqs).map(|k| k as f64 * fs / n_fft as f64).collect();

    let h = if b.len() <= n_fft {
        fft_of_taps(b, n_fft, n_freqs)
    } else {
        dtft(b, n_fft, n_freqs)
    };

    Ok(FrequencyResponse { freqs, h })
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// FFT of `b` zero-padded to `n_fft`, truncated to the first `keep` bins.
fn fft_of_taps(b: &[f64], n_fft: usize, keep: usize) -> Vec<Complex<f64>> {
    let mut buf: Vec<Complex<f64>> = b
        .iter()
        .map(|&v| Complex { re: v, im: 0.0 })
        .chain(std::iter::repeat(Complex::default()))
        .take(n_fft)
        .collect();
    let mut planner: FftPlanner<f64> = FftPlanner::new();
    planner.plan_fft_forward(n_fft).process(&mut buf);
    buf.truncate(keep);
    buf
}

/// Direct `Σ b[n] · e^{-jωn}` at `ω_k = 2πk / n_fft`, `k < keep`.
fn dtft(b: &[f64], n_fft: usize, keep: usize) -> Vec<Complex<f64>> {
    (0..keep)
        .map(|k| {
            let w = 2.0 * PI * k as f64 / n_fft as f64;
            b.iter()
                .enumerate()
                .map(|(n, &v)| Complex::from_polar(v, -w * n as f64))
                .sum::<Complex<f64>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_stop_short_of_nyquist() {
        let r = freqz(&[1.0], 512, 44100.0).unwrap();
        assert_eq!(r.len(), 512);
        assert_eq!(r.freqs[0], 0.0);
        approx::assert_abs_diff_eq!(r.freqs[1], 44100.0 / 1024.0, epsilon = 1e-12);
        assert!(*r.freqs.last().unwrap() < 22050.0);
    }

    #[test]
    fn impulse_is_flat() {
        let r = freqz(&[1.0], 64, 1000.0).unwrap();
        for db in r.magnitude_db() {
            approx::assert_abs_diff_eq!(db, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fft_and_dtft_agree() {
        let b: Vec<f64> = (0..9).map(|i| (i as f64 * 0.37).sin()).collect();
        let fast = fft_of_taps(&b, 32, 16);
        let slow = dtft(&b, 32, 16);
        for (x, y) in fast.iter().zip(slow.iter()) {
            approx::assert_abs_diff_eq!(x.re, y.re, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn long_filter_uses_dtft() {
        // 9 taps on a 4-point grid: longer than the FFT.
        let b = vec![1.0 / 9.0; 9];
        let r = freqz(&b, 2, 8.0).unwrap();
        approx::assert_abs_diff_eq!(r.h[0].re, 1.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(r.h[0].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_magnitude_gives_negative_infinity() {
        // First difference: exact zero at DC.
        let r = freqz(&[1.0, -1.0], 4, 100.0).unwrap();
        let db = r.magnitude_db();
        assert_eq!(db[0], f64::NEG_INFINITY);
        assert!(db[1..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(freqz(&[1.0], 0, 100.0).unwrap_err(), DesignError::NoFrequencyBins);
    }
}
