//! Row-major brute-force sampling.

use rand::Rng;
use rayon::prelude::*;

use super::{sample_buffer, Sample, SampleSelector};
use crate::error::TransferError;
use crate::image::LabImage;
use crate::stats::neighborhood_stats;

/// Samples the first `count` pixels in row-major order: sample `i` sits at
/// `x = i % width`, `y = i / width`. The count is capped at the pixel count,
/// so asking for at least `width * height` samples scans every pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl SampleSelector for BruteForce {
    fn select<R: Rng>(
        &self,
        image: &LabImage,
        count: usize,
        window_size: usize,
        _rng: &mut R,
    ) -> Result<Vec<Sample>, TransferError> {
        let count = count.min(image.len());
        let mut samples = sample_buffer(count)?;
        (0..count)
            .into_par_iter()
            .map(|i| {
                let (x, y) = image.position(i);
                Sample {
                    x,
                    y,
                    stats: neighborhood_stats(image, x, y, window_size),
                }
            })
            .collect_into_vec(&mut samples);
        Ok(samples)
    }
}
