//! Whole-image color transfer.
//!
//! For every target pixel the engine computes the pixel's own neighborhood
//! statistic, finds the closest source sample and copies the chrominance of
//! the source pixel under that sample. Target luminance is never written.

use rand::Rng;
use rayon::prelude::*;

use crate::error::TransferError;
use crate::image::LabImage;
use crate::matching::{best_match, Match};
use crate::options::TransferOptions;
use crate::sampling::Sample;
use crate::stats::{neighborhood_stats, remap_luminance, RemapReport};

/// Per-pixel outcome of a transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReport {
    /// Matched sample index for each target pixel, row-major.
    pub matches: Vec<usize>,
}

/// Copies chrominance from matched source samples onto a target image.
#[derive(Debug, Clone, Copy)]
pub struct ColorTransferEngine<'a> {
    options: &'a TransferOptions,
}

impl<'a> ColorTransferEngine<'a> {
    pub fn new(options: &'a TransferOptions) -> Self {
        Self { options }
    }

    /// Colorize `target` in place from `samples` drawn over `source`.
    ///
    /// Runs in two parallel passes: a read-only pass that matches every
    /// pixel, then a write pass in which each worker only touches its own
    /// pixel. Fails with [`TransferError::InvalidSampleCount`] when the
    /// sample set is empty.
    pub fn transfer(
        &self,
        source: &LabImage,
        samples: &[Sample],
        target: &mut LabImage,
    ) -> Result<TransferReport, TransferError> {
        let window = self.options.window_size;
        let mean_weight = self.options.mean_weight;
        let verbose = self.options.verbose;

        let found: Option<Vec<Match>> = {
            let target: &LabImage = target;
            (0..target.len())
                .into_par_iter()
                .map(|i| {
                    let (x, y) = target.position(i);
                    let query = neighborhood_stats(target, x, y, window);
                    let m = best_match(samples, query, mean_weight)?;
                    if verbose {
                        let s = &samples[m.index];
                        tracing::trace!(
                            x,
                            y,
                            mean = query.mean,
                            std_dev = query.std_dev,
                            sample = m.index,
                            source_x = s.x,
                            source_y = s.y,
                            cost = m.cost,
                            "pixel matched"
                        );
                    }
                    Some(m)
                })
                .collect()
        };
        let found = found.ok_or(TransferError::InvalidSampleCount(samples.len()))?;

        target
            .pixels_mut()
            .par_iter_mut()
            .zip(found.par_iter())
            .for_each(|(pixel, m)| {
                let s = &samples[m.index];
                *pixel = pixel.with_chroma_of(source.get(s.x, s.y));
            });

        Ok(TransferReport {
            matches: found.into_iter().map(|m| m.index).collect(),
        })
    }
}

/// Everything one source/target colorization produced.
#[derive(Debug, Clone)]
pub struct PairOutcome {
    /// Samples drawn from the remapped source, in source coordinates.
    pub samples: Vec<Sample>,
    pub report: TransferReport,
    pub remap: RemapReport,
}

/// Remap, sample and transfer for one isolated source/target pair.
///
/// `source` is remapped in place. `sample_count` is the budget for this
/// pair: the global count for a whole-image run, the swatch count for a
/// swatch sub-run.
pub fn colorize_pair<R: Rng>(
    options: &TransferOptions,
    source: &mut LabImage,
    target: &mut LabImage,
    sample_count: usize,
    rng: &mut R,
) -> Result<PairOutcome, TransferError> {
    let remap = remap_luminance(source, target);
    let samples = options
        .sampling
        .select(source, sample_count, options.window_size, rng)?;
    tracing::debug!(
        samples = samples.len(),
        method = ?options.sampling,
        "source sampled"
    );
    let report = ColorTransferEngine::new(options).transfer(source, &samples, target)?;
    Ok(PairOutcome {
        samples,
        report,
        remap,
    })
}
