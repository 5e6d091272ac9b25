//! Axis-aligned pixel rectangles.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;

/// An axis-aligned rectangle in pixel coordinates.
///
/// `x`/`y` is the top-left corner, the rectangle covers columns
/// `x..x + width` and rows `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the rectangle is non-empty and lies entirely inside an image
    /// of the given size.
    pub fn fits_within(&self, image_width: usize, image_height: usize) -> bool {
        !self.is_empty()
            && self
                .x
                .checked_add(self.width)
                .is_some_and(|right| right <= image_width)
            && self
                .y
                .checked_add(self.height)
                .is_some_and(|bottom| bottom <= image_height)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

impl fmt::Display for Rect {
    /// Geometry notation: `WIDTHxHEIGHT+X+Y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

impl FromStr for Rect {
    type Err = ParseOptionError;

    /// Parse `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<usize> = s
            .split(',')
            .map(|p| p.trim().parse::<usize>())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseOptionError::InvalidRect(s.to_string()))?;
        match parts.as_slice() {
            &[x, y, width, height] => Ok(Rect::new(x, y, width, height)),
            _ => Err(ParseOptionError::InvalidRect(s.to_string())),
        }
    }
}
