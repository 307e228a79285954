use std::collections::HashMap;
use std::sync::Mutex;
use std::thread::{self, ThreadId};

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use framesig_core::pipeline::{PipelineStage, ProgressReporter};

/// Drives indicatif bars from pipeline progress callbacks.
///
/// Batch pipelines run videos on separate worker threads; each thread gets
/// its own bar under a shared `MultiProgress` so concurrent stages never
/// interleave on one bar.
pub struct BarReporter {
    multi: MultiProgress,
    style: ProgressStyle,
    bars: Mutex<HashMap<ThreadId, ProgressBar>>,
}

impl BarReporter {
    pub fn new() -> Result<Self> {
        let style = ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> ");
        Ok(Self {
            multi: MultiProgress::new(),
            style,
            bars: Mutex::new(HashMap::new()),
        })
    }

    fn bar(&self) -> ProgressBar {
        let mut bars = self.bars.lock().expect("progress bar registry poisoned");
        bars.entry(thread::current().id())
            .or_insert_with(|| {
                self.multi
                    .add(ProgressBar::new(0).with_style(self.style.clone()))
            })
            .clone()
    }

    pub fn finish(&self) {
        let bars = self.bars.lock().expect("progress bar registry poisoned");
        for bar in bars.values() {
            bar.finish_and_clear();
        }
        let _ = self.multi.clear();
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        let bar = self.bar();
        bar.set_length(total_items.unwrap_or(1) as u64);
        bar.set_position(0);
        bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar().set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        let bar = self.bar();
        bar.set_position(bar.length().unwrap_or(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_stages_get_separate_bars() {
        let reporter = BarReporter::new().unwrap();
        thread::scope(|s| {
            for _ in 0..2 {
                s.spawn(|| {
                    reporter.begin_stage(PipelineStage::Analyzing, Some(4));
                    reporter.advance(1);
                    reporter.finish_stage();
                });
            }
        });
        assert_eq!(reporter.bars.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_stage_resets_bar_on_same_thread() {
        let reporter = BarReporter::new().unwrap();
        reporter.begin_stage(PipelineStage::Analyzing, Some(10));
        reporter.advance(10);
        reporter.begin_stage(PipelineStage::Plotting, None);

        let bars = reporter.bars.lock().unwrap();
        assert_eq!(bars.len(), 1);
        let bar = bars.values().next().unwrap();
        assert_eq!(bar.position(), 0);
        assert_eq!(bar.length(), Some(1));
    }
}
