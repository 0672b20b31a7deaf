//! PNG plot of a filter's magnitude response.
//!
//! Amplitude in dB against frequency in Hz, drawn with Plotters'
//! bitmap backend.  Text uses the DejaVu Sans face bundled in `assets/`, so
//! rendering does not depend on fonts installed on the host.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::filter::FrequencyResponse;

/// X-axis label.
pub const X_LABEL: &str = "Frequency (Hz)";
/// Y-axis label.
pub const Y_LABEL: &str = "Amplitude (dB)";

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const FONT_FAMILY: &str = "sans-serif";

/// Render `resp` as a line plot into the PNG at `path`, replacing any
/// existing file.
///
/// Bins whose dB value is not finite (`-inf` at exact zeros) have no place on
/// a linear axis.  The line breaks at each of them and resumes at the next
/// finite bin, so a response with no finite bin gives an empty chart.
///
/// # Errors
///
/// * `resp` has no bins.
/// * The PNG cannot be rendered or written to `path`.
pub fn plot_response(resp: &FrequencyResponse, path: &Path, size: (u32, u32)) -> Result<()> {
    let all = resp.db_points();
    if all.is_empty() {
        bail!("frequency response has no bins to plot");
    }
    let runs = finite_runs(&all);
    let n_finite: usize = runs.iter().map(Vec::len).sum();
    if n_finite < all.len() {
        log::warn!(
            "{} of {} bins have non-finite magnitude and are not drawn",
            all.len() - n_finite,
            all.len()
        );
    }

    // Frequencies are sorted; only the dB axis gets a margin.
    let x0 = all[0].0;
    let x1 = all[all.len() - 1].0.max(x0 + 1.0);
    let (y0, y1) = if n_finite == 0 {
        (-1.0, 1.0)
    } else {
        axis_range(runs.iter().flatten().map(|p| p.1))
    };

    register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
        .map_err(|_| anyhow!("bundled font is not a valid TrueType file"))?;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(6)
        .y_labels(8)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .label_style((FONT_FAMILY, 13).into_font())
        .axis_desc_style((FONT_FAMILY, 15).into_font())
        .draw()?;

    // matplotlib's default first line colour.
    let line_color = RGBColor(31, 119, 180);
    for run in runs {
        chart.draw_series(LineSeries::new(run, &line_color))?;
    }

    root.present()
        .with_context(|| format!("failed to write plot to {}", path.display()))?;
    log::info!("wrote frequency response plot → {}", path.display());
    Ok(())
}

/// Split `points` into maximal runs of finite dB values.
fn finite_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    points
        .split(|(_, db)| !db.is_finite())
        .filter(|run| !run.is_empty())
        .map(<[(f64, f64)]>::to_vec)
        .collect()
}

/// Data range padded by 5 % on each side; a flat series gets ±1.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = 0.05 * span;
    (lo - pad, hi + pad)
}
