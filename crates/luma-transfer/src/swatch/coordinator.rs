//! Per-swatch colorization followed by diffusion.

use rayon::prelude::*;

use super::diffusion::diffuse;
use super::SwatchSet;
use crate::error::TransferError;
use crate::image::{ColorMask, LabImage};
use crate::options::TransferOptions;
use crate::sampling::{seeded_rng, Jittered, Sample, SampleSelector};
use crate::stats::RemapReport;
use crate::transfer::colorize_pair;

/// What a swatch run did.
#[derive(Debug, Clone)]
pub struct SwatchReport {
    /// Every swatch's samples, in full-source coordinates, swatch by swatch.
    pub samples: Vec<Sample>,
    /// Luminance remap of each swatch's source region.
    pub remaps: Vec<RemapReport>,
    /// Size of the diffusion pool.
    pub pool_size: usize,
    /// Pixels colored by diffusion rather than by a swatch.
    pub diffused_pixels: usize,
}

/// Runs the transfer pipeline once per swatch pair, then diffuses color into
/// every target pixel no swatch covered.
///
/// Swatches are independent and run in parallel. Swatch `i` draws its
/// jitter from RNG stream `i` and the diffusion pool from stream
/// `swatches.len()`, so the result is the same on any number of threads.
/// Results are pasted back in index order; where target swatches overlap the
/// later one wins.
#[derive(Debug, Clone, Copy)]
pub struct SwatchCoordinator<'a> {
    options: &'a TransferOptions,
}

impl<'a> SwatchCoordinator<'a> {
    pub fn new(options: &'a TransferOptions) -> Self {
        Self { options }
    }

    /// Colorize `target` in place. `source` is only read; each swatch remaps
    /// a private copy of its source region.
    pub fn run(
        &self,
        source: &LabImage,
        target: &mut LabImage,
        swatches: &SwatchSet,
    ) -> Result<SwatchReport, TransferError> {
        let options = self.options;
        swatches.validate_bounds(
            (source.width(), source.height()),
            (target.width(), target.height()),
        )?;

        let colorized = {
            let target: &LabImage = target;
            swatches
                .pairs()
                .par_iter()
                .enumerate()
                .map(|(i, pair)| {
                    let mut src = source.crop(&pair.source);
                    let mut dst = target.crop(&pair.target);
                    let mut rng = seeded_rng(options.seed, i as u64);
                    let outcome = colorize_pair(
                        options,
                        &mut src,
                        &mut dst,
                        options.swatch_sample_count,
                        &mut rng,
                    )?;
                    tracing::debug!(
                        swatch = i,
                        source = %pair.source,
                        target = %pair.target,
                        samples = outcome.samples.len(),
                        "swatch colorized"
                    );
                    Ok((dst, outcome))
                })
                .collect::<Result<Vec<_>, TransferError>>()?
        };

        let mut mask = ColorMask::new(target.width(), target.height());
        let mut samples = Vec::new();
        let mut remaps = Vec::with_capacity(colorized.len());
        for (pair, (patch, outcome)) in swatches.pairs().iter().zip(colorized) {
            target.paste(&patch, pair.target.x, pair.target.y);
            mask.fill_rect(&pair.target);
            samples.extend(
                outcome
                    .samples
                    .iter()
                    .map(|s| s.offset(pair.source.x, pair.source.y)),
            );
            remaps.push(outcome.remap);
        }
        tracing::debug!(uncovered = mask.count_unset(), "swatches pasted");

        let pool = self.diffusion_pool(target, swatches)?;
        let diffused_pixels = diffuse(
            target,
            &mut mask,
            &pool,
            options.diffusion_window,
            options.verbose,
        );
        tracing::info!(
            swatches = swatches.len(),
            pool = pool.len(),
            diffused = diffused_pixels,
            "swatch transfer finished"
        );

        Ok(SwatchReport {
            samples,
            remaps,
            pool_size: pool.len(),
            diffused_pixels,
        })
    }

    /// Jittered re-sample of every colorized target swatch, in full-target
    /// coordinates.
    fn diffusion_pool(
        &self,
        target: &LabImage,
        swatches: &SwatchSet,
    ) -> Result<Vec<Sample>, TransferError> {
        let mut rng = seeded_rng(self.options.seed, swatches.len() as u64);
        let mut pool = Vec::new();
        for pair in swatches.pairs() {
            let region = target.crop(&pair.target);
            let picked = Jittered.select(
                &region,
                self.options.swatch_sample_count,
                self.options.window_size,
                &mut rng,
            )?;
            pool.try_reserve(picked.len())
                .map_err(|_| TransferError::Allocation {
                    count: pool.len() + picked.len(),
                })?;
            pool.extend(
                picked
                    .into_iter()
                    .map(|s| s.offset(pair.target.x, pair.target.y)),
            );
        }
        Ok(pool)
    }
}
