//! Colorizer builder.

use crate::color::{ColorSpace, PerceptualSpace, Srgb};
use crate::error::TransferError;
use crate::image::LabImage;
use crate::options::TransferOptions;
use crate::output::{render_sample_overlay, Colorized};
use crate::sampling::{seeded_rng, Sample, SamplingMethod};
use crate::swatch::{SwatchCoordinator, SwatchSet};
use crate::transfer::colorize_pair;

/// Colorizes a grayscale image from a color reference.
///
/// Configuration methods consume and return `self`; the colorize methods
/// take `&self`, so one `Colorizer` can be reused across many images.
/// Options are validated at the start of every run, before any pixel is
/// converted.
///
/// # Example
///
/// ```
/// use luma_transfer::{Colorizer, PerceptualSpace, Rect, SamplingMethod, Srgb, SwatchSet};
///
/// let source = vec![Srgb::from_u8(30, 90, 200); 64];
/// let target = vec![Srgb::grey(120); 64];
///
/// let colorizer = Colorizer::new()
///     .sampling(SamplingMethod::BruteForce)
///     .samples(64)
///     .color_space(PerceptualSpace::CieLab);
/// let whole = colorizer.colorize(&source, 8, 8, &target, 8, 8).unwrap();
/// assert_eq!(whole.samples().len(), 64);
///
/// let swatches = SwatchSet::new(vec![Rect::new(0, 0, 4, 4)], vec![Rect::new(4, 4, 4, 4)]).unwrap();
/// let constrained = colorizer
///     .colorize_with_swatches(&source, 8, 8, &target, 8, 8, &swatches)
///     .unwrap();
/// assert_eq!(constrained.diffused_pixels(), 64 - 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Colorizer {
    options: TransferOptions,
    space: PerceptualSpace,
}

impl Colorizer {
    /// Default options in Oklab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: TransferOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn color_space(mut self, space: PerceptualSpace) -> Self {
        self.space = space;
        self
    }

    #[inline]
    pub fn window_size(mut self, size: usize) -> Self {
        self.options = self.options.window_size(size);
        self
    }

    #[inline]
    pub fn samples(mut self, count: usize) -> Self {
        self.options = self.options.sample_count(count);
        self
    }

    #[inline]
    pub fn sampling(mut self, method: SamplingMethod) -> Self {
        self.options = self.options.sampling(method);
        self
    }

    #[inline]
    pub fn mean_weight(mut self, weight: f32) -> Self {
        self.options = self.options.mean_weight(weight);
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    #[inline]
    pub fn show_samples(mut self, enabled: bool) -> Self {
        self.options = self.options.show_samples(enabled);
        self
    }

    #[inline]
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.options = self.options.verbose(enabled);
        self
    }

    pub fn transfer_options(&self) -> &TransferOptions {
        &self.options
    }

    pub fn space(&self) -> PerceptualSpace {
        self.space
    }

    /// Colorize the whole `target` from the whole `source`.
    ///
    /// Pipeline:
    /// 1. Validate options, convert both images into the perceptual space
    /// 2. Remap source luminance onto the target's distribution
    /// 3. Sample the source, match and copy chrominance per target pixel
    /// 4. Convert back to display space
    pub fn colorize(
        &self,
        source: &[Srgb],
        source_width: usize,
        source_height: usize,
        target: &[Srgb],
        target_width: usize,
        target_height: usize,
    ) -> Result<Colorized, TransferError> {
        self.options.validate()?;
        let mut src = LabImage::from_srgb(source, source_width, source_height, &self.space)?;
        let mut dst = LabImage::from_srgb(target, target_width, target_height, &self.space)?;
        tracing::info!(
            source = %format_args!("{source_width}x{source_height}"),
            target = %format_args!("{target_width}x{target_height}"),
            space = self.space.name(),
            method = ?self.options.sampling,
            samples = self.options.sample_count,
            window = self.options.window_size,
            "colorizing"
        );

        let mut rng = seeded_rng(self.options.seed, 0);
        let outcome = colorize_pair(
            &self.options,
            &mut src,
            &mut dst,
            self.options.sample_count,
            &mut rng,
        )?;

        Ok(self.finish(source, source_width, &dst, outcome.samples, 0))
    }

    /// Colorize `target` using only the paired swatch regions, diffusing
    /// color from the swatches into the rest of the image.
    ///
    /// Swatch rectangles are checked against both images before anything
    /// is converted.
    #[allow(clippy::too_many_arguments)]
    pub fn colorize_with_swatches(
        &self,
        source: &[Srgb],
        source_width: usize,
        source_height: usize,
        target: &[Srgb],
        target_width: usize,
        target_height: usize,
        swatches: &SwatchSet,
    ) -> Result<Colorized, TransferError> {
        self.options.validate()?;
        swatches.validate_bounds(
            (source_width, source_height),
            (target_width, target_height),
        )?;
        let src = LabImage::from_srgb(source, source_width, source_height, &self.space)?;
        let mut dst = LabImage::from_srgb(target, target_width, target_height, &self.space)?;
        tracing::info!(
            swatches = swatches.len(),
            space = self.space.name(),
            samples = self.options.swatch_sample_count,
            "colorizing with swatches"
        );

        let report = SwatchCoordinator::new(&self.options).run(&src, &mut dst, swatches)?;

        Ok(self.finish(
            source,
            source_width,
            &dst,
            report.samples,
            report.diffused_pixels,
        ))
    }

    fn finish(
        &self,
        source: &[Srgb],
        source_width: usize,
        target: &LabImage,
        samples: Vec<Sample>,
        diffused_pixels: usize,
    ) -> Colorized {
        let overlay = self
            .options
            .show_samples
            .then(|| render_sample_overlay(source, source_width, &samples));
        Colorized::new(
            target.width(),
            target.height(),
            target.to_srgb(&self.space),
            samples,
            overlay,
            diffused_pixels,
        )
    }
}
