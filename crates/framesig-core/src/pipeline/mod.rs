pub mod config;
pub mod entropy;
pub mod spectral;
mod types;

pub use types::{NoOpReporter, PipelineStage, ProgressReporter};
