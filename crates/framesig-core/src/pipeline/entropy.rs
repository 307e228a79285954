use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::consts::DEFAULT_FRAME_RATE;
use crate::entropy::frame_entropy;
use crate::error::{FramesigError, Result};
use crate::io::ser::SerReader;
use crate::render::chart::render_entropy_chart;
use crate::signature::{SignatureSeries, SummaryStats};

use super::config::EntropyConfig;
use super::types::{PipelineStage, ProgressReporter};

/// Per-video result of the entropy pipeline.
#[derive(Clone, Debug)]
pub struct VideoReport {
    pub video: PathBuf,
    pub frame_rate: f64,
    pub series: SignatureSeries,
    pub stats: SummaryStats,
    pub plot_path: PathBuf,
}

/// Outcome of a batch run: reports in input order, plus inputs that were
/// skipped with the reason.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<VideoReport>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Decode one video in order and build its entropy signature series.
///
/// Frame rate resolution: explicit override, else the rate derived from the
/// source's timestamp trailer, else [`DEFAULT_FRAME_RATE`].
pub fn analyze_video(
    path: &Path,
    frame_rate_override: Option<f64>,
    reporter: &dyn ProgressReporter,
) -> Result<(f64, SignatureSeries)> {
    let reader = SerReader::open(path)?;
    let total = reader.frame_count();
    let frame_rate = frame_rate_override
        .or_else(|| reader.derived_frame_rate())
        .unwrap_or(DEFAULT_FRAME_RATE);
    if frame_rate <= 0.0 {
        return Err(FramesigError::Pipeline(format!(
            "Non-positive frame rate: {frame_rate}"
        )));
    }

    info!(
        video = %path.display(),
        total_frames = total,
        frame_rate,
        "Analyzing entropy"
    );

    reporter.begin_stage(PipelineStage::Analyzing, Some(total));
    let mut series = SignatureSeries::with_capacity(total);
    for index in 0..total {
        let gray = reader.read_frame(index)?;
        series.push(index as f64 / frame_rate, frame_entropy(&gray));
        reporter.advance(index + 1);
    }
    reporter.finish_stage();

    Ok((frame_rate, series))
}

/// Analyze every configured video and render one chart each.
///
/// Videos are independent: each gets its own decode handle, and a video that
/// cannot be opened or yields no frames is logged and reported as skipped
/// while the rest of the batch proceeds.
pub fn analyze_batch(config: &EntropyConfig, reporter: &dyn ProgressReporter) -> Result<BatchOutcome> {
    fs::create_dir_all(&config.output_dir)?;

    let results: Vec<std::result::Result<VideoReport, (PathBuf, String)>> = config
        .inputs
        .par_iter()
        .map(|path| {
            process_one(path, config, reporter).map_err(|e| {
                warn!(video = %path.display(), error = %e, "Skipping video");
                (path.clone(), e.to_string())
            })
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(skip) => outcome.skipped.push(skip),
        }
    }
    Ok(outcome)
}

fn process_one(
    path: &Path,
    config: &EntropyConfig,
    reporter: &dyn ProgressReporter,
) -> Result<VideoReport> {
    let (frame_rate, series) = analyze_video(path, config.frame_rate, reporter)?;
    let stats = series.summary(path)?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    let plot_path = config.output_dir.join(format!("{stem}_entropy.png"));

    reporter.begin_stage(PipelineStage::Plotting, None);
    render_entropy_chart(&series, &stats, &stem, &plot_path)?;
    reporter.finish_stage();

    info!(chart = %plot_path.display(), "Chart saved");

    Ok(VideoReport {
        video: path.to_path_buf(),
        frame_rate,
        series,
        stats,
        plot_path,
    })
}
