//! Luminance remapping.
//!
//! Matching compares raw luminance statistics, so a bright reference and a
//! dark target would never match sensibly. Before matching, the source
//! luminance is linearly rescaled so its global mean and standard deviation
//! equal the target's:
//!
//! ```text
//! l' = (target_std / source_std) * (l - source_mean) + target_mean
//! ```

use rayon::prelude::*;

use super::neighborhood::LuminanceStats;
use crate::image::LabImage;

/// Source standard deviations below this are treated as zero variance.
pub const DEGENERATE_STD_DEV: f32 = 1e-6;

/// What [`remap_luminance`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemapReport {
    /// Source statistics before remapping
    pub source: LuminanceStats,
    /// Target statistics (unchanged)
    pub target: LuminanceStats,
    /// Scale factor that was applied
    pub ratio: f32,
    /// True when the source had zero variance and the ratio fell back to 1.0
    pub degenerate: bool,
}

/// Rescale the source luminance in place to match the target's distribution.
///
/// A zero-variance source makes the ratio undefined. In that case the ratio
/// falls back to 1.0, so the source luminance is only shifted onto the target
/// mean, and a warning is logged.
pub fn remap_luminance(source: &mut LabImage, target: &LabImage) -> RemapReport {
    let source_stats = source.luminance_stats();
    let target_stats = target.luminance_stats();

    let degenerate = source_stats.std_dev < DEGENERATE_STD_DEV;
    let ratio = if degenerate {
        tracing::warn!(
            source_mean = source_stats.mean,
            "source luminance has zero variance; remapping with ratio 1.0"
        );
        1.0
    } else {
        target_stats.std_dev / source_stats.std_dev
    };

    source.pixels_mut().par_iter_mut().for_each(|p| {
        p.l = ratio * (p.l - source_stats.mean) + target_stats.mean;
    });

    tracing::debug!(
        ratio,
        source_mean = source_stats.mean,
        source_std = source_stats.std_dev,
        target_mean = target_stats.mean,
        target_std = target_stats.std_dev,
        "luminance remapped"
    );

    RemapReport {
        source: source_stats,
        target: target_stats,
        ratio,
        degenerate,
    }
}
