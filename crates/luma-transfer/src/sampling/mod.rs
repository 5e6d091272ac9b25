//! Source sample selection.
//!
//! Matching never scans the whole source image. Instead a fixed, ordered set
//! of [`Sample`]s is drawn once per run (or once per swatch), each carrying
//! the luminance statistics of its neighborhood.
//!
//! # Strategies
//!
//! - [`Jittered`]: one randomly offset sample per cell of a square grid.
//!   Even spatial coverage at a fixed cost (default).
//! - [`BruteForce`]: the first `n` pixels in row-major order. With `n` equal
//!   to the pixel count this is an exhaustive scan.
//!
//! Both implement [`SampleSelector`]; [`SamplingMethod`] picks one per run.

mod brute_force;
mod jittered;

pub use brute_force::BruteForce;
pub use jittered::{cell_span, grid_size, Jittered};

use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{ParseOptionError, TransferError};
use crate::image::LabImage;
use crate::stats::LuminanceStats;

/// A sampled source position and the statistics of its neighborhood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: usize,
    pub y: usize,
    pub stats: LuminanceStats,
}

impl Sample {
    /// The same sample moved by `(dx, dy)`, e.g. from swatch into full-image
    /// coordinates.
    #[inline]
    pub fn offset(self, dx: usize, dy: usize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// A strategy producing a representative, ordered sample set.
///
/// The returned order is insertion order and must be reproducible for a
/// given RNG state.
pub trait SampleSelector {
    /// Draw up to `count` samples from `image`, computing each sample's
    /// statistics over a `window_size` neighborhood.
    fn select<R: Rng>(
        &self,
        image: &LabImage,
        count: usize,
        window_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Sample>, TransferError>;
}

/// Sampling strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMethod {
    /// Stratified jittered sampling over a `floor(sqrt(n))` square grid.
    #[default]
    Jittered,
    /// Row-major scan of the first `n` pixels.
    BruteForce,
}

impl SamplingMethod {
    /// Dispatch to the selected strategy.
    pub fn select<R: Rng>(
        self,
        image: &LabImage,
        count: usize,
        window_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Sample>, TransferError> {
        match self {
            SamplingMethod::Jittered => Jittered.select(image, count, window_size, rng),
            SamplingMethod::BruteForce => BruteForce.select(image, count, window_size, rng),
        }
    }
}

impl FromStr for SamplingMethod {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "jittered" | "jitter" => Ok(SamplingMethod::Jittered),
            "brute-force" | "bruteforce" => Ok(SamplingMethod::BruteForce),
            _ => Err(ParseOptionError::Unknown {
                what: "sampling method",
                value: s.to_string(),
                expected: "jittered, brute-force",
            }),
        }
    }
}

/// Deterministic RNG for one independent unit of work.
///
/// Each unit (the global run, one swatch, the diffusion pool) gets its own
/// ChaCha stream under the same seed, so results do not depend on the order
/// in which parallel units happen to run.
pub fn seeded_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Empty sample buffer with room for `count` samples.
pub(crate) fn sample_buffer(count: usize) -> Result<Vec<Sample>, TransferError> {
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| TransferError::Allocation { count })?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("jittered".parse(), Ok(SamplingMethod::Jittered));
        assert_eq!("Brute_Force".parse(), Ok(SamplingMethod::BruteForce));
        assert_eq!("bruteforce".parse(), Ok(SamplingMethod::BruteForce));
        assert!("random".parse::<SamplingMethod>().is_err());
    }

    #[test]
    fn test_sample_buffer_reports_allocation_failure() {
        assert_eq!(
            sample_buffer(usize::MAX),
            Err(TransferError::Allocation { count: usize::MAX })
        );
    }

    #[test]
    fn test_seeded_rng_streams_differ() {
        let mut a = seeded_rng(7, 0);
        let mut b = seeded_rng(7, 1);
        let mut a2 = seeded_rng(7, 0);
        let xa: u64 = a.gen();
        assert_ne!(xa, b.gen::<u64>());
        assert_eq!(xa, a2.gen::<u64>());
    }
}
