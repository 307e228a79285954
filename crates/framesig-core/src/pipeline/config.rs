use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the batch entropy pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntropyConfig {
    /// Videos to analyze, one chart each.
    pub inputs: Vec<PathBuf>,
    /// Directory for the `<stem>_entropy.png` charts; created if absent.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Overrides the frame rate derived from the source, if set.
    #[serde(default)]
    pub frame_rate: Option<f64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output_graphs")
}

/// Configuration for the spectral overlay pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpectralConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Overrides the frame rate derived from the source, if set.
    #[serde(default)]
    pub frame_rate: Option<f64>,
}
