//! The result of a colorization run.

use crate::color::Srgb;
use crate::sampling::Sample;

/// A colorized target image in display space.
///
/// Pixels are stored row-major. [`to_rgb8()`](Colorized::to_rgb8) gives
/// packed 8-bit RGB ready for encoding.
///
/// # Example
///
/// ```
/// use luma_transfer::{Colorizer, Srgb};
///
/// let source = vec![Srgb::from_u8(200, 40, 40); 4];
/// let target = vec![Srgb::grey(90); 4];
/// let result = Colorizer::new()
///     .colorize(&source, 2, 2, &target, 2, 2)
///     .unwrap();
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.to_rgb8().len(), 2 * 2 * 3);
/// assert!(result.sample_overlay().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Colorized {
    width: usize,
    height: usize,
    pixels: Vec<Srgb>,
    /// Samples in source coordinates.
    samples: Vec<Sample>,
    sample_overlay: Option<Vec<Srgb>>,
    diffused_pixels: usize,
}

impl Colorized {
    pub(crate) fn new(
        width: usize,
        height: usize,
        pixels: Vec<Srgb>,
        samples: Vec<Sample>,
        sample_overlay: Option<Vec<Srgb>>,
        diffused_pixels: usize,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
            samples,
            sample_overlay,
            diffused_pixels,
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
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }

    /// Every sample the run drew, in source image coordinates.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The source with sampled positions marked, when requested.
    #[inline]
    pub fn sample_overlay(&self) -> Option<&[Srgb]> {
        self.sample_overlay.as_deref()
    }

    /// Pixels colored by swatch diffusion; zero for a whole-image run.
    #[inline]
    pub fn diffused_pixels(&self) -> usize {
        self.diffused_pixels
    }

    /// Packed 8-bit RGB, 3 bytes per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        pack_rgb8(&self.pixels)
    }

    /// Packed 8-bit RGB of the sample overlay, when requested.
    pub fn overlay_rgb8(&self) -> Option<Vec<u8>> {
        self.sample_overlay.as_deref().map(pack_rgb8)
    }
}

fn pack_rgb8(pixels: &[Srgb]) -> Vec<u8> {
    pixels.iter().flat_map(|c| c.to_bytes()).collect()
}
