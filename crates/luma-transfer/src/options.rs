//! Transfer options and configuration.
//!
//! [`TransferOptions`] is an immutable value passed explicitly into every
//! component; nothing in the engine reads configuration from anywhere else.

use crate::error::TransferError;
use crate::sampling::SamplingMethod;

/// Default neighborhood window size.
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Default number of source samples (16 x 16 jitter grid).
pub const DEFAULT_SAMPLE_COUNT: usize = 256;
/// Default per-swatch sample budget (8 x 8 jitter grid).
pub const DEFAULT_SWATCH_SAMPLE_COUNT: usize = 64;
/// Default diffusion patch window size.
pub const DEFAULT_DIFFUSION_WINDOW: usize = 5;
/// Default weight of the mean in the match cost.
pub const DEFAULT_MEAN_WEIGHT: f32 = 0.5;

/// Configuration for a color transfer run.
///
/// # Defaults
///
/// - Window size: 5
/// - Sample count: 256, jittered
/// - Mean weight: 0.5 (stddev weight is `1 - mean_weight`)
/// - Swatch sample count: 64
/// - Diffusion window: 5
/// - Seed: 0
/// - No diagnostics
///
/// # Example
///
/// ```
/// use luma_transfer::{SamplingMethod, TransferOptions};
///
/// let options = TransferOptions::new()
///     .window_size(7)
///     .sampling(SamplingMethod::BruteForce)
///     .mean_weight(0.7);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOptions {
    /// Side length of the square neighborhood window.
    pub window_size: usize,

    /// Number of samples drawn from the source image.
    ///
    /// Jittered sampling uses a `floor(sqrt(n))` square grid, so counts that
    /// are not perfect squares are truncated to the next lower square.
    pub sample_count: usize,

    /// How samples are drawn from the source image.
    pub sampling: SamplingMethod,

    /// Weight of the mean difference in the match cost, in `[0, 1]`.
    pub mean_weight: f32,

    /// Sample budget of each swatch sub-run, and of each swatch's share of
    /// the diffusion pool.
    pub swatch_sample_count: usize,

    /// Side length of the patch compared during diffusion.
    pub diffusion_window: usize,

    /// Seed for the jitter random number generator.
    pub seed: u64,

    /// Produce an image marking the sampled source positions.
    pub show_samples: bool,

    /// Trace every pixel's match.
    pub verbose: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            sampling: SamplingMethod::default(),
            mean_weight: DEFAULT_MEAN_WEIGHT,
            swatch_sample_count: DEFAULT_SWATCH_SAMPLE_COUNT,
            diffusion_window: DEFAULT_DIFFUSION_WINDOW,
            seed: 0,
            show_samples: false,
            verbose: false,
        }
    }
}

impl TransferOptions {
    /// Create new options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    #[inline]
    pub fn sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    #[inline]
    pub fn sampling(mut self, method: SamplingMethod) -> Self {
        self.sampling = method;
        self
    }

    #[inline]
    pub fn mean_weight(mut self, weight: f32) -> Self {
        self.mean_weight = weight;
        self
    }

    #[inline]
    pub fn swatch_sample_count(mut self, count: usize) -> Self {
        self.swatch_sample_count = count;
        self
    }

    #[inline]
    pub fn diffusion_window(mut self, size: usize) -> Self {
        self.diffusion_window = size;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn show_samples(mut self, enabled: bool) -> Self {
        self.show_samples = enabled;
        self
    }

    #[inline]
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Check every numeric parameter, reporting the first violation.
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.window_size == 0 {
            return Err(TransferError::InvalidWindowSize(self.window_size));
        }
        if self.sample_count == 0 {
            return Err(TransferError::InvalidSampleCount(self.sample_count));
        }
        if !(0.0..=1.0).contains(&self.mean_weight) {
            // NaN fails the range check too
            return Err(TransferError::InvalidMeanWeight(self.mean_weight));
        }
        if self.swatch_sample_count == 0 {
            return Err(TransferError::InvalidSwatchSampleCount(
                self.swatch_sample_count,
            ));
        }
        if self.diffusion_window == 0 {
            return Err(TransferError::InvalidDiffusionWindow(self.diffusion_window));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = TransferOptions::default();
        assert_eq!(opts.window_size, 5);
        assert_eq!(opts.sample_count, 256);
        assert_eq!(opts.sampling, SamplingMethod::Jittered);
        assert!((opts.mean_weight - 0.5).abs() < f32::EPSILON);
        assert_eq!(opts.swatch_sample_count, 64);
        assert!(opts.swatch_sample_count < opts.sample_count);
        assert!(!opts.show_samples);
        assert!(!opts.verbose);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let opts = TransferOptions::new()
            .window_size(9)
            .sample_count(100)
            .sampling(SamplingMethod::BruteForce)
            .mean_weight(0.25)
            .swatch_sample_count(16)
            .diffusion_window(3)
            .seed(42)
            .show_samples(true)
            .verbose(true);

        assert_eq!(opts.window_size, 9);
        assert_eq!(opts.sample_count, 100);
        assert_eq!(opts.sampling, SamplingMethod::BruteForce);
        assert!((opts.mean_weight - 0.25).abs() < f32::EPSILON);
        assert_eq!(opts.swatch_sample_count, 16);
        assert_eq!(opts.diffusion_window, 3);
        assert_eq!(opts.seed, 42);
        assert!(opts.show_samples);
        assert!(opts.verbose);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        assert_eq!(
            TransferOptions::new().window_size(0).validate(),
            Err(TransferError::InvalidWindowSize(0))
        );
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        assert_eq!(
            TransferOptions::new().sample_count(0).validate(),
            Err(TransferError::InvalidSampleCount(0))
        );
        assert_eq!(
            TransferOptions::new().swatch_sample_count(0).validate(),
            Err(TransferError::InvalidSwatchSampleCount(0))
        );
    }

    #[test]
    fn test_validate_rejects_bad_mean_weight() {
        assert!(TransferOptions::new().mean_weight(1.5).validate().is_err());
        assert!(TransferOptions::new().mean_weight(-0.1).validate().is_err());
        assert!(TransferOptions::new()
            .mean_weight(f32::NAN)
            .validate()
            .is_err());
        assert!(TransferOptions::new().mean_weight(0.0).validate().is_ok());
        assert!(TransferOptions::new().mean_weight(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_diffusion_window() {
        assert_eq!(
            TransferOptions::new().diffusion_window(0).validate(),
            Err(TransferError::InvalidDiffusionWindow(0))
        );
    }
}
