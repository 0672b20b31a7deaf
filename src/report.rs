//! Console listing of the designed coefficients.
//!
//! ```text
//! -- Filter Coefficients --
//! 0.0006253,
//! -0.0009991,
//! …
//! 0.0006253
//! ```
//!
//! One coefficient per line in fixed-point notation, lines joined by `,\n`, no
//! trailing comma after the last value.

/// First line of the listing.
pub const COEFF_HEADER: &str = "-- Filter Coefficients --";

/// Format every coefficient with `precision` fractional digits, joined by `,\n`.
pub fn format_coefficient_lines(h: &[f64], precision: usize) -> String {
    h.iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Full listing: [`COEFF_HEADER`], a newline, then the coefficient lines.
///
/// No trailing newline; the caller decides how to terminate it.
pub fn format_coefficients(h: &[f64], precision: usize) -> String {
    format!("{COEFF_HEADER}\n{}", format_coefficient_lines(h, precision))
}
