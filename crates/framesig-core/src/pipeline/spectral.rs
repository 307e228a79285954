use tracing::info;

use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::{FramesigError, Result};
use crate::frame::{ColorFrame, ColorMode};
use crate::gray::luminance;
use crate::io::ser::SerReader;
use crate::io::ser_writer::{rgb_header, SerWriter};
use crate::render::overlay::overlay_spectrum;
use crate::spectrum::magnitude_spectrum;

use super::config::SpectralConfig;
use super::types::{PipelineStage, ProgressReporter};

/// Run the spectral overlay pipeline on a single video.
///
/// Per frame: grayscale reduction, 2-D FFT magnitude spectrum, calibrated
/// panel render, composite over the top-left quadrant, write to the output
/// video. Strict decode order, one write per input frame; the first error
/// aborts the run. The source's timestamp trailer is carried over so the
/// output keeps the source frame rate.
pub fn process_video(config: &SpectralConfig, reporter: &dyn ProgressReporter) -> Result<()> {
    let reader = SerReader::open(&config.input)?;
    let header = reader.header.clone();
    if header.width < 2 || header.height < 2 {
        return Err(FramesigError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }

    let total = reader.frame_count();
    let frame_rate = config
        .frame_rate
        .or_else(|| reader.derived_frame_rate())
        .unwrap_or(DEFAULT_FRAME_RATE);
    info!(
        video = %config.input.display(),
        total_frames = total,
        frame_rate,
        "Compositing spectrum overlay"
    );

    let out_header = rgb_header(header.width, header.height, header.frame_count);
    let mut writer = SerWriter::create(&config.output, &out_header)?;

    let is_color = matches!(header.color_mode(), ColorMode::RGB | ColorMode::BGR);

    reporter.begin_stage(PipelineStage::Compositing, Some(total));
    for index in 0..total {
        let (color, gray) = if is_color {
            let color = reader.read_frame_rgb(index)?;
            let gray = luminance(&color);
            (color, gray)
        } else {
            let gray = reader.read_frame(index)?;
            (ColorFrame::from_mono(gray.clone()), gray)
        };

        let spectrum = magnitude_spectrum(&gray);
        let composite = overlay_spectrum(&color, &spectrum)?;
        writer.write_color_frame(&composite)?;
        reporter.advance(index + 1);
    }
    reporter.finish_stage();

    if let Some(timestamps) = reader.timestamps() {
        writer.write_timestamps(&timestamps)?;
    }
    writer.finalize()?;

    info!(output = %config.output.display(), "Output video saved");
    Ok(())
}
