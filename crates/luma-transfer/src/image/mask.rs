//! Per-pixel "already colorized" flags.

use super::rect::Rect;

/// A boolean plane parallel to an image.
///
/// Tracks which target pixels received color from a swatch, so that a
/// legitimately neutral pixel is never mistaken for an uncolored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMask {
    width: usize,
    height: usize,
    flags: Vec<bool>,
}

impl ColorMask {
    /// A mask with every pixel unset.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            flags: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.flags[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        self.flags[y * self.width + x] = true;
    }

    /// Set every pixel inside `rect`. The rectangle must fit the mask.
    pub fn fill_rect(&mut self, rect: &Rect) {
        for row in self.flags.chunks_mut(self.width).skip(rect.y).take(rect.height) {
            row[rect.x..rect.x + rect.width].fill(true);
        }
    }

    pub fn fill_all(&mut self) {
        self.flags.fill(true);
    }

    /// Row-major indices of every unset pixel, in increasing order.
    pub fn unset_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| (!set).then_some(i))
            .collect()
    }

    pub fn count_unset(&self) -> usize {
        self.flags.iter().filter(|&&set| !set).count()
    }
}
