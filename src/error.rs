use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing image files
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image dimensions {width}x{height} do not fit the pixel data")]
    InvalidDimensions { width: usize, height: usize },
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
