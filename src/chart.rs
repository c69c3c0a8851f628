use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

pub const DEFAULT_CHART_FILE: &str = "reaction_graph.png";

/// Fixed raster size, overwritten on every finished session.
const CHART_SIZE: (u32, u32) = (600, 400);

/// Renders the session's reaction times as a scatter plot: X is the 1-based
/// press index, Y the reaction time in seconds. Rendering or I/O failure is
/// fatal and propagates to the caller.
pub fn render(times: &[f64], path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Keep a non-degenerate Y range even for an empty or all-zero series.
    let max_time = times.iter().copied().fold(0.0_f64, f64::max).max(0.1);
    let max_press = times.len().max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Reaction time", ("sans-serif", 24))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..max_press + 1.0, 0.0..max_time * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Press")
        .y_desc("Time (sec)")
        .draw()?;

    chart.draw_series(
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| Circle::new(((i + 1) as f64, t), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
