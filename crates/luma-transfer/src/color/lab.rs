//! Luminance/chrominance pixel.

/// A pixel in a luminance/chrominance separated perceptual space.
///
/// `l` is the luminance the statistics are computed on. `a` and `b` are the
/// two chrominance channels that get copied from source to target. The scale
/// of each channel depends on the [`ColorSpace`](super::ColorSpace) that
/// produced the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Luminance
    pub l: f32,
    /// First chrominance channel (green-red axis)
    pub a: f32,
    /// Second chrominance channel (blue-yellow axis)
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Keep this pixel's luminance, take the chrominance of `donor`.
    #[inline]
    pub fn with_chroma_of(self, donor: Lab) -> Self {
        Self {
            l: self.l,
            a: donor.a,
            b: donor.b,
        }
    }
}
