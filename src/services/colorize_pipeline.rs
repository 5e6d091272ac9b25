use std::path::{Path, PathBuf};

use luma_transfer::quality::psnr;
use luma_transfer::{Colorizer, SwatchSet};

use crate::error::AppError;
use crate::imaging::{load_png, save_png, RgbImage};
use crate::models::sample_overlay_path;

/// Summary of one transfer run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub samples: usize,
    pub diffused_pixels: usize,
    pub destination: PathBuf,
    pub overlay: Option<PathBuf>,
}

/// Load -> colorize -> save, for one pair of files.
pub struct ColorizePipeline {
    colorizer: Colorizer,
    swatches: Option<SwatchSet>,
}

impl ColorizePipeline {
    /// A pipeline that colorizes the whole image, or only from `swatches`
    /// when given.
    pub fn new(colorizer: Colorizer, swatches: Option<SwatchSet>) -> Self {
        Self {
            colorizer,
            swatches,
        }
    }

    /// Colorize `gray` from `color` and write the result to `destination`.
    ///
    /// Options are validated before either image is read. The destination
    /// is written in a single write after the result is fully encoded, so a
    /// failed run leaves no output behind. The sample overlay, when
    /// requested, is written first.
    pub fn run(
        &self,
        color: &Path,
        gray: &Path,
        destination: &Path,
    ) -> Result<RunSummary, AppError> {
        self.colorizer.transfer_options().validate()?;

        let source = load_png(color)?;
        let target = load_png(gray)?;

        let result = match &self.swatches {
            Some(swatches) => self.colorizer.colorize_with_swatches(
                &source.pixels,
                source.width,
                source.height,
                &target.pixels,
                target.width,
                target.height,
                swatches,
            )?,
            None => self.colorizer.colorize(
                &source.pixels,
                source.width,
                source.height,
                &target.pixels,
                target.width,
                target.height,
            )?,
        };

        let overlay = match result.overlay_rgb8() {
            Some(rgb) => {
                let path = sample_overlay_path(destination);
                save_png(&path, source.width, source.height, &rgb)?;
                tracing::info!(path = %path.display(), "Wrote sample overlay");
                Some(path)
            }
            None => None,
        };

        save_png(destination, result.width(), result.height(), &result.to_rgb8())?;
        tracing::info!(
            path = %destination.display(),
            width = result.width(),
            height = result.height(),
            diffused = result.diffused_pixels(),
            "Wrote colorized image"
        );

        Ok(RunSummary {
            width: result.width(),
            height: result.height(),
            samples: result.samples().len(),
            diffused_pixels: result.diffused_pixels(),
            destination: destination.to_path_buf(),
            overlay,
        })
    }
}

/// PSNR in dB between two image files of equal size.
pub fn compare_files(reference: &Path, candidate: &Path) -> Result<f64, AppError> {
    let reference = load_png(reference)?;
    let candidate = load_png(candidate)?;
    compare_images(&reference, &candidate)
}

pub fn compare_images(reference: &RgbImage, candidate: &RgbImage) -> Result<f64, AppError> {
    if (reference.width, reference.height) != (candidate.width, candidate.height) {
        return Err(AppError::SizeMismatch {
            expected_width: reference.width,
            expected_height: reference.height,
            actual_width: candidate.width,
            actual_height: candidate.height,
        });
    }
    Ok(psnr(&reference.to_rgb8(), &candidate.to_rgb8())?)
}
