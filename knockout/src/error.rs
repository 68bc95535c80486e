//! Error type shared by every stage of the remover.
//!
//! Failures fall into two fatal classes, input and output, plus the
//! configuration errors raised before any pixel is touched. Nothing is
//! retried and nothing is cleaned up: a failed write may leave a partial file.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RemoverError>;

#[derive(Debug, thiserror::Error)]
pub enum RemoverError {
    /// The input is missing, unreadable, or not a supported image format.
    #[error("failed to decode image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A raw RGBA buffer does not hold `width * height * 4` bytes.
    #[error("RGBA buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The output file could not be created (missing or read-only directory).
    #[error("failed to create output file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding or the write into the created file failed.
    #[error("failed to encode PNG to {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("threshold must be between 0 and 255, got {0}")]
    InvalidThreshold(i64),
}

impl RemoverError {
    pub fn is_input_failure(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::BufferSize { .. })
    }

    pub fn is_output_failure(&self) -> bool {
        matches!(self, Self::Create { .. } | Self::Encode { .. })
    }
}
