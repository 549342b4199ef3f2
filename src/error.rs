//! Error type shared by the scanner core and the I/O helpers.
use std::path::PathBuf;
use thiserror::Error;

/// Causes of failure for gradient computation, scanning and image/frame I/O.
#[derive(Error, Debug)]
pub enum EdgeError {
    /// The array is too small for the stencil or smoothing window.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A width or edge count is zero or out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The image library could not produce an intensity field from the file.
    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// An output image could not be encoded or written.
    #[error("failed to encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tool configuration could not be read or parsed.
    #[error("bad config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("ffmpeg executable not found. Make sure ffmpeg is installed and on the PATH")]
    FfmpegNotFound,

    /// Ffmpeg exited with a failure. Holds the first part of its stderr.
    #[error("frame extraction failed: {0}")]
    FrameExtraction(String),
}

pub type Result<T> = std::result::Result<T, EdgeError>;

impl EdgeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EdgeError::Io {
            path: path.into(),
            source,
        }
    }
}
