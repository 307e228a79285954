mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "framesig", about = "Video complexity diagnostics tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show SER video metadata
    Info(commands::info::InfoArgs),
    /// Plot per-frame histogram entropy for one or more videos
    Entropy(commands::entropy::EntropyArgs),
    /// Composite the per-frame FFT magnitude spectrum into an output video
    Spectrum(commands::spectrum::SpectrumArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Entropy(args) => commands::entropy::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
    }
}
