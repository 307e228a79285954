use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use framesig_core::pipeline::config::EntropyConfig;
use framesig_core::pipeline::entropy::analyze_batch;

use crate::progress::BarReporter;
use crate::summary;

#[derive(Args)]
pub struct EntropyArgs {
    /// Input SER video files
    pub files: Vec<PathBuf>,

    /// Directory for the entropy charts
    #[arg(long, default_value = "output_graphs")]
    pub output_dir: PathBuf,

    /// Frame rate override (frames per second)
    #[arg(long)]
    pub fps: Option<f64>,

    /// Pipeline config file (TOML); replaces the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &EntropyArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid entropy config")?
    } else {
        EntropyConfig {
            inputs: args.files.clone(),
            output_dir: args.output_dir.clone(),
            frame_rate: args.fps,
        }
    };
    if config.inputs.is_empty() {
        anyhow::bail!("No input videos given");
    }

    summary::print_entropy_summary(&config);

    let reporter = BarReporter::new()?;
    let outcome = analyze_batch(&config, &reporter)?;
    reporter.finish();

    for report in &outcome.reports {
        println!("{}", report.video.display());
        println!("  Frames:   {}", report.series.len());
        println!("  FPS:      {:.2}", report.frame_rate);
        println!(
            "  Entropy:  min {:.3} / mean {:.3} / max {:.3}",
            report.stats.min, report.stats.mean, report.stats.max
        );
        println!("  Chart:    {}", report.plot_path.display());
    }

    if !outcome.skipped.is_empty() {
        println!("\nSkipped:");
        for (path, reason) in &outcome.skipped {
            println!("  {}: {}", path.display(), reason);
        }
    }

    if outcome.reports.is_empty() {
        anyhow::bail!("All inputs failed");
    }
    Ok(())
}
