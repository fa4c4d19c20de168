use std::path::PathBuf;

use swatch_engine::EngineError;
use thiserror::Error;

/// Failure to obtain the swatch metadata table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read lookup table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lookup table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Lookup table must be an array or an object of rows")]
    Shape,
}

/// Failure to load one image. Swatch images failing this way are dropped
/// from the usable catalogue; the load carries on.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Failed to read image {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {filename}: {reason}")]
    Decode { filename: String, reason: String },

    #[error("Image task failed: {0}")]
    Task(String),
}

/// Failure of a whole mosaic or atlas request.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("No swatches available")]
    NoSwatchesAvailable,

    #[error("Sample image unreadable: {0}")]
    SampleUnreadable(String),

    #[error("Request {ticket} superseded by request {latest}")]
    StaleRequest { ticket: u64, latest: u64 },
}

impl From<EngineError> for ComposeError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NoSwatchesAvailable => ComposeError::NoSwatchesAvailable,
            other => ComposeError::SampleUnreadable(other.to_string()),
        }
    }
}

impl From<ImageError> for ComposeError {
    fn from(e: ImageError) -> Self {
        ComposeError::SampleUnreadable(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Nothing to render: {0}")]
    Empty(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
