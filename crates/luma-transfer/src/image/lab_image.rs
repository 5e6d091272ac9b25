//! Perceptual image buffer.

use rayon::prelude::*;

use super::rect::Rect;
use crate::color::{ColorSpace, Lab, Srgb};
use crate::error::TransferError;
use crate::stats::LuminanceStats;

/// A 2D grid of [`Lab`] pixels with fixed dimensions.
///
/// Pixels are stored in row-major order: pixel `(x, y)` lives at index
/// `y * width + x`. The dimensions never change after construction; only
/// pixel values are mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LabImage {
    width: usize,
    height: usize,
    pixels: Vec<Lab>,
}

impl LabImage {
    /// Wrap a pixel buffer.
    ///
    /// Fails with [`TransferError::EmptyImage`] for a zero-sized image and
    /// [`TransferError::DimensionMismatch`] when the buffer length does not
    /// equal `width * height`.
    pub fn new(pixels: Vec<Lab>, width: usize, height: usize) -> Result<Self, TransferError> {
        check_dimensions(pixels.len(), width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert display pixels into the perceptual space.
    pub fn from_srgb<S: ColorSpace + ?Sized>(
        pixels: &[Srgb],
        width: usize,
        height: usize,
        space: &S,
    ) -> Result<Self, TransferError> {
        check_dimensions(pixels.len(), width, height)?;
        let pixels = pixels.par_iter().map(|&c| space.to_perceptual(c)).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert back to display pixels.
    pub fn to_srgb<S: ColorSpace + ?Sized>(&self, space: &S) -> Vec<Srgb> {
        self.pixels.par_iter().map(|&lab| space.to_display(lab)).collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: construction rejects empty images.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Lab] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Lab] {
        &mut self.pixels
    }

    /// Row-major position of a pixel index.
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Lab {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Lab {
        &mut self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn luminance(&self, x: usize, y: usize) -> f32 {
        self.pixels[y * self.width + x].l
    }

    /// Global luminance mean and population standard deviation.
    pub fn luminance_stats(&self) -> LuminanceStats {
        LuminanceStats::of_image(self)
    }

    /// Copy out the pixels under `rect`, which must fit inside the image.
    pub fn crop(&self, rect: &Rect) -> LabImage {
        debug_assert!(
            rect.fits_within(self.width, self.height),
            "crop {rect} outside {}x{} image",
            self.width,
            self.height
        );
        let mut pixels = Vec::with_capacity(rect.area());
        for row in self.pixels.chunks(self.width).skip(rect.y).take(rect.height) {
            pixels.extend_from_slice(&row[rect.x..rect.x + rect.width]);
        }
        LabImage {
            width: rect.width,
            height: rect.height,
            pixels,
        }
    }

    /// Overwrite the pixels starting at `(x, y)` with `patch`, which must fit.
    pub fn paste(&mut self, patch: &LabImage, x: usize, y: usize) {
        debug_assert!(
            Rect::new(x, y, patch.width, patch.height).fits_within(self.width, self.height),
            "paste of {}x{} at ({x}, {y}) outside {}x{} image",
            patch.width,
            patch.height,
            self.width,
            self.height
        );
        let rows = self.pixels.chunks_mut(self.width).skip(y);
        for (dst, src) in rows.zip(patch.pixels.chunks(patch.width)) {
            dst[x..x + patch.width].copy_from_slice(src);
        }
    }
}

fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), TransferError> {
    if width == 0 || height == 0 {
        return Err(TransferError::EmptyImage { width, height });
    }
    let expected = width
        .checked_mul(height)
        .ok_or(TransferError::DimensionMismatch {
            expected: usize::MAX,
            actual: len,
        })?;
    if len != expected {
        return Err(TransferError::DimensionMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PerceptualSpace;

    fn ramp(width: usize, height: usize) -> LabImage {
        let pixels = (0..width * height)
            .map(|i| Lab::new(i as f32, 0.0, 0.0))
            .collect();
        LabImage::new(pixels, width, height).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            LabImage::new(Vec::new(), 0, 3),
            Err(TransferError::EmptyImage {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = LabImage::new(vec![Lab::default(); 5], 2, 3).unwrap_err();
        assert_eq!(
            err,
            TransferError::DimensionMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_row_major_access() {
        let image = ramp(4, 3);
        assert_eq!(image.luminance(0, 0), 0.0);
        assert_eq!(image.luminance(3, 0), 3.0);
        assert_eq!(image.luminance(1, 2), 9.0);
        assert_eq!(image.position(9), (1, 2));
    }

    #[test]
    fn test_crop() {
        let image = ramp(4, 3);
        let sub = image.crop(&Rect::new(1, 1, 2, 2));
        assert_eq!(sub.width(), 2);
        assert_eq!(sub.height(), 2);
        let lum: Vec<f32> = sub.pixels().iter().map(|p| p.l).collect();
        assert_eq!(lum, vec![5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_paste_round_trips_crop() {
        let mut image = ramp(4, 3);
        let mut patch = image.crop(&Rect::new(2, 0, 2, 3));
        for p in patch.pixels_mut() {
            p.a = 1.0;
        }
        image.paste(&patch, 2, 0);
        for y in 0..3 {
            for x in 0..4 {
                let expected_a = if x >= 2 { 1.0 } else { 0.0 };
                assert_eq!(image.get(x, y).a, expected_a, "pixel ({x}, {y})");
                assert_eq!(image.luminance(x, y), (y * 4 + x) as f32);
            }
        }
    }

    #[test]
    fn test_srgb_round_trip() {
        let pixels = vec![
            Srgb::from_u8(255, 0, 0),
            Srgb::from_u8(0, 128, 255),
            Srgb::grey(77),
            Srgb::from_u8(3, 250, 9),
        ];
        let image = LabImage::from_srgb(&pixels, 2, 2, &PerceptualSpace::Oklab).unwrap();
        let back = image.to_srgb(&PerceptualSpace::Oklab);
        for (a, b) in pixels.iter().zip(&back) {
            assert_eq!(a.to_bytes(), b.to_bytes());
        }
    }
}
