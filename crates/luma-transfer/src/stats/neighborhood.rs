//! Local luminance statistics.

use crate::image::LabImage;

/// Mean and population standard deviation of a set of luminance values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LuminanceStats {
    pub mean: f32,
    pub std_dev: f32,
}

impl LuminanceStats {
    #[inline]
    pub fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }

    /// Two-pass mean and population standard deviation, accumulated in f64.
    /// An empty input yields zeros.
    pub fn from_values<I>(values: I) -> Self
    where
        I: Iterator<Item = f32> + Clone,
    {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        for v in values.clone() {
            sum += v as f64;
            count += 1;
        }
        if count == 0 {
            return Self::default();
        }
        let mean = sum / count as f64;
        let var = values
            .map(|v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;
        Self {
            mean: mean as f32,
            std_dev: var.sqrt() as f32,
        }
    }

    /// Global statistics over every pixel of an image.
    pub fn of_image(image: &LabImage) -> Self {
        Self::from_values(image.pixels().iter().map(|p| p.l))
    }
}

/// A neighborhood window clipped to the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Window {
    /// Window of nominal `size` around `(x, y)`.
    ///
    /// The top-left corner sits `size / 2` pixels up and left of the query,
    /// clamped at zero; the extent is `size` unless that would run past the
    /// image edge, in which case it shrinks to what remains. Near borders the
    /// window is therefore smaller and no longer centered on the query.
    /// It always contains at least the query pixel.
    pub fn around(x: usize, y: usize, size: usize, image_width: usize, image_height: usize) -> Self {
        let half = size / 2;
        let left = x.saturating_sub(half).min(image_width);
        let top = y.saturating_sub(half).min(image_height);
        Self {
            left,
            top,
            width: size.min(image_width - left),
            height: size.min(image_height - top),
        }
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Mean and standard deviation of luminance in the window around `(x, y)`.
pub fn neighborhood_stats(image: &LabImage, x: usize, y: usize, window_size: usize) -> LuminanceStats {
    let window = Window::around(x, y, window_size, image.width(), image.height());
    let rows = image
        .pixels()
        .chunks(image.width())
        .skip(window.top)
        .take(window.height);
    LuminanceStats::from_values(
        rows.flat_map(|row| row[window.left..window.left + window.width].iter())
            .map(|p| p.l),
    )
}
