//! Figure rendering and display using Plotters

use std::path::Path;

use anyhow::{bail, Context};
use plotters::prelude::*;

use crate::data::{Metric, MetricsTable};

/// Composite figure dimensions in pixels
pub const FIGURE_SIZE: (u32, u32) = (1000, 600);

/// Render the three metric charts into a single PNG figure.
///
/// The figure is a 2x3 grid whose top-row cells hold one chart per metric in
/// [`Metric::ALL`] order; each chart draws the metric against `k` as a line
/// with circular markers, titled and labeled with the metric name. X-axis
/// ticks are exactly the distinct `k` values of the table.
///
/// The output directory must already exist; it is never created here. The
/// file itself is created or overwritten when the figure is presented.
pub fn render_metric_charts(table: &MetricsTable, output_path: &Path) -> crate::Result<()> {
    // The bitmap backend only touches the filesystem when the finished
    // figure is presented, so refuse a missing target directory up front.
    if let Some(dir) = output_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            bail!("Output directory {} does not exist", dir.display());
        }
    }

    let root = BitMapBackend::new(output_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // 2x3 grid with the charts across the top row, bottom row left blank
    let cells = root.split_evenly((2, 3));

    let ks = table.ks();
    let ticks = table.distinct_ks();
    let (x_min, x_max) = x_bounds(&ticks);

    for (cell, metric) in cells.iter().zip(Metric::ALL) {
        let values = table.metric_values(metric);
        let (y_min, y_max) = y_bounds(&values);
        let points: Vec<(i32, f64)> = ks.iter().copied().zip(values).collect();

        let mut chart = ChartBuilder::on(cell)
            .caption(metric.name(), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d((x_min..x_max).with_key_points(ticks.clone()), y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("k")
            .y_desc(metric.name())
            .axis_desc_style(("sans-serif", 15))
            .draw()?;

        chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
        chart.draw_series(
            points
                .iter()
                .map(|&(k, value)| Circle::new((k, value), 3, BLUE.filled())),
        )?;
    }

    // Writes the PNG, creating or overwriting the file
    root.present()?;

    Ok(())
}

/// Open the saved figure in the system image viewer.
///
/// On Linux the viewer is only launched when a display session is detected
/// (`DISPLAY` or `WAYLAND_DISPLAY`); headless runs note the skip and return
/// successfully.
pub fn display_figure(path: &Path) -> crate::Result<()> {
    if !display_available() {
        println!("No display detected; skipping the interactive view");
        return Ok(());
    }

    open::that(path)
        .with_context(|| format!("Failed to open {} in the system image viewer", path.display()))
}

fn display_available() -> bool {
    if cfg!(target_os = "linux") {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

/// Integer x-range with one unit of slack so edge markers stay off the frame
fn x_bounds(ticks: &[i32]) -> (i32, i32) {
    match (ticks.iter().min(), ticks.iter().max()) {
        (Some(&min), Some(&max)) => (min.saturating_sub(1), max.saturating_add(1)),
        _ => (0, 1),
    }
}

/// Y-range padded by 5% of the span; flat series pad by a constant instead
fn y_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let pad = if min == max { 0.5 } else { (max - min) * 0.05 };
    (min - pad, max + pad)
}
