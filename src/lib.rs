//! # lowpass-design — windowed-sinc FIR lowpass design and response plot
//!
//! Designs a Hamming-windowed FIR lowpass the way `scipy.signal.firwin` does,
//! prints its coefficients, and renders the magnitude response to a PNG.
//!
//! ## Pipeline overview
//!
//! ```text
//! FilterSpec (44.1 kHz, 41 taps, 9 kHz)
//!   │
//!   ├─ filter::design_lowpass()   Hamming-windowed sinc, Σh = 1
//!   ├─ report::format_coefficients()
//!   │     └─→ stdout              "-- Filter Coefficients --" + 41 lines
//!   ├─ filter::freqz()            512 bins on [0, fs/2), FFT-based
//!   ├─ magnitude_db()             20·log10|H|
//!   └─ plot::plot_response()
//!         └─→ filter_frequency_response.png
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use lowpass_design::{run, DesignConfig};
//!
//! let cfg = DesignConfig::default();
//! let design = run(&cfg, &mut std::io::stdout()).unwrap();
//! assert_eq!(design.coefficients.len(), 41);
//! ```
//!
//! ## Running individual steps
//!
//! ```
//! use lowpass_design::{design_lowpass, format_coefficients, freqz, FilterSpec};
//!
//! let spec = FilterSpec::default();
//! let h = design_lowpass(&spec).unwrap();
//! println!("{}", format_coefficients(&h, 7));
//!
//! let resp = freqz(&h, 512, spec.sample_rate).unwrap();
//! let db = resp.magnitude_db();
//! assert!(db[0].abs() < 1e-9); // unit DC gain
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod plot;
pub mod report;

use std::io::Write;

use anyhow::{Context, Result};

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use config::{DesignConfig, FilterSpec};
pub use error::DesignError;
pub use filter::{design_lowpass, firwin, freqz, hamming, FrequencyResponse};
pub use plot::plot_response;
pub use report::{format_coefficient_lines, format_coefficients, COEFF_HEADER};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Design {
    /// Filter taps, `cfg.spec.num_taps` long, summing to 1.
    pub coefficients: Vec<f64>,
    /// Response sampled on `cfg.n_freqs` bins.
    pub response: FrequencyResponse,
}

/// Run the **full design pipeline**: design, print, evaluate, plot.
///
/// The coefficient listing is written to `out` followed by a newline.  The
/// plot goes to `cfg.output`, replacing any previous file.
///
/// # Errors
///
/// * [`DesignError`] for an invalid configuration.  This is checked before
///   anything is written, so `out` and the plot file are left untouched.
/// * An I/O error if writing to `out` fails.
/// * A rendering or I/O error if the plot cannot be written.  The listing has
///   already been written to `out` at that point.
pub fn run<W: Write>(cfg: &DesignConfig, out: &mut W) -> Result<Design> {
    cfg.validate()?;

    let coefficients = design_lowpass(&cfg.spec)?;

    writeln!(out, "{}", format_coefficients(&coefficients, cfg.precision))
        .context("failed to write coefficient listing")?;
    out.flush().context("failed to flush coefficient listing")?;

    let response = freqz(&coefficients, cfg.n_freqs, cfg.spec.sample_rate)?;
    plot_response(&response, &cfg.output, cfg.image_size)?;

    Ok(Design { coefficients, response })
}
