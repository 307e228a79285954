use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use framesig_core::pipeline::config::SpectralConfig;
use framesig_core::pipeline::spectral::process_video;

use crate::progress::BarReporter;
use crate::summary;

#[derive(Args)]
pub struct SpectrumArgs {
    /// Input SER video file
    pub file: PathBuf,

    /// Output video path
    #[arg(short, long, default_value = "spectrum.ser")]
    pub output: PathBuf,

    /// Frame rate override (frames per second)
    #[arg(long)]
    pub fps: Option<f64>,
}

pub fn run(args: &SpectrumArgs) -> Result<()> {
    let config = SpectralConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        frame_rate: args.fps,
    };

    summary::print_spectrum_summary(&config);

    let reporter = BarReporter::new()?;
    process_video(&config, &reporter)?;
    reporter.finish();

    println!("Output saved to {}", config.output.display());
    Ok(())
}
