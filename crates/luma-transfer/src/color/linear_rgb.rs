//! Linear RGB color type
//!
//! Linear light is the shared intermediate of every perceptual conversion:
//! both Oklab and CIE L*a*b* are defined from linear sRGB primaries.

use super::srgb::{decode_gamma, Srgb};

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0 but may leave it when a
/// perceptual color outside the sRGB gamut is converted back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: decode_gamma(srgb.r),
            g: decode_gamma(srgb.g),
            b: decode_gamma(srgb.b),
        }
    }
}
