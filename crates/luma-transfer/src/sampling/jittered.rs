//! Stratified jittered sampling.

use std::ops::Range;

use rand::Rng;
use rayon::prelude::*;

use super::{sample_buffer, Sample, SampleSelector};
use crate::error::TransferError;
use crate::image::LabImage;
use crate::stats::neighborhood_stats;

/// Side length of the jitter grid for a requested sample count:
/// `floor(sqrt(count))`. The excess of a non-square count is dropped.
pub fn grid_size(count: usize) -> usize {
    let mut n = (count as f64).sqrt() as usize;
    // correct float rounding for large counts; an overflowing square is
    // always larger than `count`
    while n.checked_mul(n).map_or(true, |sq| sq > count) {
        n -= 1;
    }
    while (n + 1).checked_mul(n + 1).is_some_and(|sq| sq <= count) {
        n += 1;
    }
    n
}

/// Pixel span of cell `index` when `extent` pixels are split into `cells`.
///
/// Cells partition the extent as evenly as integer division allows. When
/// the image is narrower than the grid some cells would be empty; those are
/// widened to the single pixel at their start so every cell can be sampled.
pub fn cell_span(extent: usize, cells: usize, index: usize) -> Range<usize> {
    let start = index * extent / cells;
    let end = ((index + 1) * extent / cells).max(start + 1);
    start..end
}

/// One uniformly jittered sample per cell of an `n x n` grid, where
/// `n = floor(sqrt(count))`. Cells are visited row by row, so sample
/// `gy * n + gx` comes from cell `(gx, gy)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jittered;

impl SampleSelector for Jittered {
    fn select<R: Rng>(
        &self,
        image: &LabImage,
        count: usize,
        window_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Sample>, TransferError> {
        let n = grid_size(count);
        let total = n * n;

        // Positions are drawn sequentially so the RNG sequence alone fixes them
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(total)
            .map_err(|_| TransferError::Allocation { count: total })?;
        for gy in 0..n {
            let rows = cell_span(image.height(), n, gy);
            for gx in 0..n {
                let cols = cell_span(image.width(), n, gx);
                positions.push((rng.gen_range(cols), rng.gen_range(rows.clone())));
            }
        }

        let mut samples = sample_buffer(total)?;
        positions
            .into_par_iter()
            .map(|(x, y)| Sample {
                x,
                y,
                stats: neighborhood_stats(image, x, y, window_size),
            })
            .collect_into_vec(&mut samples);
        Ok(samples)
    }
}
