use std::path::Path;

use plotters::prelude::*;

use crate::consts::{CHART_HEIGHT, CHART_WIDTH, ENTROPY_PLOT_Y_MAX};
use crate::error::{FramesigError, Result};
use crate::signature::{SignatureSeries, SummaryStats};

const MIN_COLOR: RGBColor = RGBColor(0, 128, 0);
const MAX_COLOR: RGBColor = RGBColor(255, 165, 0);

/// Render the entropy-vs-time chart for one video as a PNG.
///
/// Line series plus three labeled horizontal reference lines (min, mean,
/// max), gridlines, legend, fixed vertical range [0, 8].
pub fn render_entropy_chart(
    series: &SignatureSeries,
    stats: &SummaryStats,
    video_name: &str,
    path: &Path,
) -> Result<()> {
    if series.is_empty() {
        return Err(FramesigError::EmptySeries(video_name.into()));
    }
    draw(series, stats, video_name, path).map_err(|e| FramesigError::Render(e.to_string()))
}

fn draw(
    series: &SignatureSeries,
    stats: &SummaryStats,
    video_name: &str,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let last_ts = series.samples().last().map(|s| s.timestamp).unwrap_or(0.0);
    // A one-frame video has a zero-length time axis; give it some width.
    let x_max = if last_ts > 0.0 { last_ts } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Entropy over time - {video_name}"),
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, 0.0..ENTROPY_PLOT_Y_MAX)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Entropy")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.entropy)),
            &BLUE,
        ))?
        .label("Entropy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let reference_lines = [
        (stats.mean, format!("Mean: {:.2}", stats.mean), RED),
        (stats.min, format!("Min: {:.2}", stats.min), MIN_COLOR),
        (stats.max, format!("Max: {:.2}", stats.max), MAX_COLOR),
    ];
    for (value, label, color) in reference_lines {
        chart
            .draw_series(LineSeries::new([(0.0, value), (x_max, value)], &color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
