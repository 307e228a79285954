use image::{imageops, RgbImage};
use ndarray::Array2;
use plotters::prelude::*;

use crate::consts::{SPECTRUM_AXIS_TICKS, SPECTRUM_PANEL_HEIGHT, SPECTRUM_PANEL_WIDTH};
use crate::error::{FramesigError, Result};
use crate::frame::ColorFrame;
use crate::spectrum::frequency_index;

/// Render a log-magnitude spectrum as a calibrated grayscale panel.
///
/// Axes carry zero-centered frequency indices (column x at `x - w/2`, row y
/// at `y - h/2`) with a fixed number of tick labels per axis.
pub fn render_spectrum_panel(spectrum: &Array2<f64>) -> Result<RgbImage> {
    let mut buf = vec![0u8; (SPECTRUM_PANEL_WIDTH * SPECTRUM_PANEL_HEIGHT * 3) as usize];
    draw_panel(spectrum, &mut buf).map_err(|e| FramesigError::Render(e.to_string()))?;
    RgbImage::from_raw(SPECTRUM_PANEL_WIDTH, SPECTRUM_PANEL_HEIGHT, buf)
        .ok_or_else(|| FramesigError::Render("Panel buffer size mismatch".into()))
}

fn draw_panel(
    spectrum: &Array2<f64>,
    buf: &mut [u8],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (h, w) = spectrum.dim();
    let peak = spectrum.iter().copied().fold(0.0f64, f64::max);

    let root = BitMapBackend::with_buffer(buf, (SPECTRUM_PANEL_WIDTH, SPECTRUM_PANEL_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("FFT Magnitude Spectrum", ("sans-serif", 20))
        .margin(8)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(
            frequency_index(0, w)..frequency_index(w, w),
            frequency_index(0, h)..frequency_index(h, h),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(SPECTRUM_AXIS_TICKS)
        .y_labels(SPECTRUM_AXIS_TICKS)
        .x_desc("Frequency (u)")
        .y_desc("Frequency (v)")
        .draw()?;

    chart.draw_series(spectrum.indexed_iter().map(|((row, col), &value)| {
        let shade = if peak > 0.0 {
            ((value / peak) * 255.0).round() as u8
        } else {
            0
        };
        let u = frequency_index(col, w);
        let v = frequency_index(row, h);
        Rectangle::new([(u, v), (u + 1, v + 1)], RGBColor(shade, shade, shade).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Derive a composite frame: the spectrum panel resized to exactly half the
/// frame's width and height, written over the top-left rectangle of a copy
/// of the source frame.
///
/// A frame narrower or shorter than 2 pixels has a degenerate resize target
/// and is rejected.
pub fn overlay_spectrum(frame: &ColorFrame, spectrum: &Array2<f64>) -> Result<ColorFrame> {
    let w = frame.width();
    let h = frame.height();
    if w < 2 || h < 2 {
        return Err(FramesigError::InvalidDimensions {
            width: w as u32,
            height: h as u32,
        });
    }

    let panel = render_spectrum_panel(spectrum)?;
    let target_w = (w / 2) as u32;
    let target_h = (h / 2) as u32;
    let resized = imageops::resize(&panel, target_w, target_h, imageops::FilterType::Triangle);

    let mut composite = frame.clone();
    for row in 0..target_h {
        for col in 0..target_w {
            let px = resized.get_pixel(col, row);
            composite.red.data[[row as usize, col as usize]] = px[0] as f32 / 255.0;
            composite.green.data[[row as usize, col as usize]] = px[1] as f32 / 255.0;
            composite.blue.data[[row as usize, col as usize]] = px[2] as f32 / 255.0;
        }
    }
    Ok(composite)
}
