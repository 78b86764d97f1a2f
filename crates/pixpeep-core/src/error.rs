use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Select exactly two images to load both views (got {count})")]
    SelectionCount { count: usize },

    #[error("Scale {requested} is outside [{min}, {max}]")]
    TransformBounds { requested: f64, min: f64, max: f64 },

    #[error("Invalid view state: {0}")]
    InvalidViewState(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
