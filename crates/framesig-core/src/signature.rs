use std::path::Path;

use crate::error::{FramesigError, Result};

/// One entry of a per-video signature series.
#[derive(Clone, Copy, Debug)]
pub struct SignatureSample {
    /// Seconds from the start of the video: `frame_index / frame_rate`.
    pub timestamp: f64,
    /// Histogram entropy of the frame, in `[0, ln 256]`.
    pub entropy: f64,
}

/// Ordered per-frame entropy samples for one video.
///
/// Grows by append during the decode pass; summarized once the source is
/// exhausted.
#[derive(Clone, Debug, Default)]
pub struct SignatureSeries {
    samples: Vec<SignatureSample>,
}

impl SignatureSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, timestamp: f64, entropy: f64) {
        self.samples.push(SignatureSample { timestamp, entropy });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[SignatureSample] {
        &self.samples
    }

    /// Min/mean/max over all entropy values.
    ///
    /// An empty series is an explicit error, never NaN: `video` names the
    /// source in the diagnostic.
    pub fn summary(&self, video: &Path) -> Result<SummaryStats> {
        if self.samples.is_empty() {
            return Err(FramesigError::EmptySeries(video.to_path_buf()));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for sample in &self.samples {
            min = min.min(sample.entropy);
            max = max.max(sample.entropy);
            sum += sample.entropy;
        }

        Ok(SummaryStats {
            min,
            mean: sum / self.samples.len() as f64,
            max,
        })
    }
}

/// Summary statistics of one signature series.
#[derive(Clone, Copy, Debug)]
pub struct SummaryStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}
