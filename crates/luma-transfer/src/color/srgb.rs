//! sRGB color type
//!
//! sRGB is the encoding images are stored and displayed in. Channel values
//! are gamma encoded, so no statistics are ever computed on them directly.

use super::linear_rgb::LinearRgb;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use luma_transfer::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a neutral grey from a single 8-bit level.
    #[inline]
    pub fn grey(level: u8) -> Self {
        Self::from_u8(level, level, level)
    }

    /// Quantize to 8-bit channel values, rounding to nearest and clamping
    /// out-of-range channels.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma encode, clamping out-of-gamut light to 0.0..=1.0 first.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: encode_gamma(linear.r),
            g: encode_gamma(linear.g),
            b: encode_gamma(linear.b),
        }
    }
}

#[inline]
fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// IEC 61966-2-1 transfer function: encoded sRGB to linear light.
#[inline]
pub(crate) fn decode_gamma(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 transfer function: linear light to encoded sRGB.
#[inline]
pub(crate) fn encode_gamma(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_and_back() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(Srgb::from_u8(v, v, v).to_bytes(), [v, v, v]);
        }
    }

    #[test]
    fn test_to_bytes_clamps() {
        assert_eq!(Srgb::new(-0.3, 1.7, 0.5).to_bytes(), [0, 255, 128]);
    }

    #[test]
    fn test_gamma_boundaries() {
        assert!(decode_gamma(0.0).abs() < 1e-7);
        assert!((decode_gamma(1.0) - 1.0).abs() < 1e-6);
        assert!(encode_gamma(0.0).abs() < 1e-7);
        assert!((encode_gamma(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gamma_monotonic() {
        let mut prev = decode_gamma(0.0);
        for i in 1..=1000 {
            let curr = decode_gamma(i as f32 / 1000.0);
            assert!(curr >= prev, "decode_gamma not monotonic at {i}");
            prev = curr;
        }
    }
}
