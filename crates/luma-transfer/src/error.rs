//! Error types for the color transfer engine.
//!
//! [`TransferError`] covers every failure the engine can report. Each variant
//! belongs to one [`ErrorKind`]: configuration problems are detected before
//! any pixel is touched, resource problems abort a run that already started.

use std::fmt;

use thiserror::Error;

use crate::image::Rect;

/// Coarse classification of a [`TransferError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid parameters or inputs; processing never starts.
    Configuration,
    /// A buffer could not be allocated; the run is aborted.
    Resource,
}

/// Which image of a swatch pair a rectangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchSide {
    Source,
    Target,
}

impl fmt::Display for SwatchSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchSide::Source => write!(f, "source"),
            SwatchSide::Target => write!(f, "target"),
        }
    }
}

/// Unified error type for the luma-transfer public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("neighborhood window size must be positive, got {0}")]
    InvalidWindowSize(usize),

    #[error("sample count must be positive, got {0}")]
    InvalidSampleCount(usize),

    #[error("swatch sample count must be positive, got {0}")]
    InvalidSwatchSampleCount(usize),

    #[error("diffusion window size must be positive, got {0}")]
    InvalidDiffusionWindow(usize),

    #[error("mean weight must lie in [0, 1], got {0}")]
    InvalidMeanWeight(f32),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("at least one swatch pair is required")]
    NoSwatches,

    #[error(
        "swatch count mismatch: {source_count} source swatches, {target_count} target swatches"
    )]
    SwatchCountMismatch {
        source_count: usize,
        target_count: usize,
    },

    #[error("{side} swatch {index} ({rect}) does not fit inside the {width}x{height} image")]
    SwatchOutOfBounds {
        side: SwatchSide,
        index: usize,
        rect: Rect,
        width: usize,
        height: usize,
    },

    #[error("cannot allocate a buffer for {count} samples")]
    Allocation { count: usize },
}

impl TransferError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransferError::Allocation { .. } => ErrorKind::Resource,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Error returned when parsing option values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    #[error("unknown {what} '{value}' (expected one of: {expected})")]
    Unknown {
        what: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid rectangle '{0}': expected x,y,width,height")]
    InvalidRect(String),
}
