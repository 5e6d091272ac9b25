use std::path::PathBuf;

use luma_transfer::TransferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Image size mismatch: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    SizeMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported image: {0}")]
    Unsupported(String),
}

impl AppError {
    /// True when the run was rejected before any processing started.
    pub fn is_configuration(&self) -> bool {
        match self {
            AppError::Transfer(e) => e.kind() == luma_transfer::ErrorKind::Configuration,
            AppError::Config { .. } | AppError::SizeMismatch { .. } => true,
            AppError::Image(_) => false,
        }
    }
}
