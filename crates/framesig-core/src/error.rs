use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramesigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SER file: {0}")]
    InvalidSer(String),

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },

    #[error("Empty signature series: {} yielded no decodable frames", .0.display())]
    EmptySeries(PathBuf),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, FramesigError>;
