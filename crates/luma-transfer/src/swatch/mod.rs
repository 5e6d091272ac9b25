//! Swatch-constrained colorization.
//!
//! Instead of matching every target pixel against the whole source, the user
//! pairs rectangles of the source with rectangles of the target. Each pair is
//! colorized in isolation with a reduced sample budget, then the colors are
//! diffused from the swatches into the rest of the target (see
//! [`diffuse`]).

mod coordinator;
mod diffusion;

pub use coordinator::{SwatchCoordinator, SwatchReport};
pub use diffusion::{diffuse, patch_distance};

use crate::error::{SwatchSide, TransferError};
use crate::image::Rect;

/// One source rectangle and the target rectangle it colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchPair {
    pub source: Rect,
    pub target: Rect,
}

/// A non-empty, ordered list of swatch pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchSet {
    pairs: Vec<SwatchPair>,
}

impl SwatchSet {
    /// Pair up two index-correlated rectangle lists.
    ///
    /// ```
    /// use luma_transfer::{Rect, SwatchSet, TransferError};
    ///
    /// let err = SwatchSet::new(vec![Rect::new(0, 0, 4, 4)], vec![]).unwrap_err();
    /// assert!(matches!(err, TransferError::SwatchCountMismatch { .. }));
    /// ```
    pub fn new(source: Vec<Rect>, target: Vec<Rect>) -> Result<Self, TransferError> {
        if source.len() != target.len() {
            return Err(TransferError::SwatchCountMismatch {
                source_count: source.len(),
                target_count: target.len(),
            });
        }
        let pairs = source
            .into_iter()
            .zip(target)
            .map(|(source, target)| SwatchPair { source, target })
            .collect();
        Self::from_pairs(pairs)
    }

    pub fn from_pairs(pairs: Vec<SwatchPair>) -> Result<Self, TransferError> {
        if pairs.is_empty() {
            return Err(TransferError::NoSwatches);
        }
        Ok(Self { pairs })
    }

    #[inline]
    pub fn pairs(&self) -> &[SwatchPair] {
        &self.pairs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false: construction rejects empty sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check that every rectangle is non-empty and inside its image.
    pub fn validate_bounds(
        &self,
        source_size: (usize, usize),
        target_size: (usize, usize),
    ) -> Result<(), TransferError> {
        for (index, pair) in self.pairs.iter().enumerate() {
            for (side, rect, (width, height)) in [
                (SwatchSide::Source, pair.source, source_size),
                (SwatchSide::Target, pair.target, target_size),
            ] {
                if !rect.fits_within(width, height) {
                    return Err(TransferError::SwatchOutOfBounds {
                        side,
                        index,
                        rect,
                        width,
                        height,
                    });
                }
            }
        }
        Ok(())
    }
}
