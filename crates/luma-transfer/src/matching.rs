//! Nearest-sample search.
//!
//! A target pixel's neighborhood statistic is compared against every sample
//! with a weighted squared distance:
//!
//! ```text
//! cost = w * (q.mean - s.mean)^2 + (1 - w) * (q.std_dev - s.std_dev)^2
//! ```
//!
//! The scan is parallel. The minimum is found with a reduction that orders
//! candidates by `(cost, index)`, which is associative and commutative, so
//! the lowest index wins among exact ties no matter how rayon splits the work.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::sampling::Sample;
use crate::stats::LuminanceStats;

/// Below this many samples the scan stays on one thread.
const MIN_SAMPLES_PER_TASK: usize = 64;

/// The winning sample of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Index into the sample set.
    pub index: usize,
    /// Weighted distance to the query.
    pub cost: f32,
}

/// Weighted statistic distance between a query and a sample.
#[inline]
pub fn match_cost(query: LuminanceStats, sample: LuminanceStats, mean_weight: f32) -> f32 {
    let dm = query.mean - sample.mean;
    let ds = query.std_dev - sample.std_dev;
    mean_weight * dm * dm + (1.0 - mean_weight) * ds * ds
}

/// Find the sample closest to `query`. Returns `None` for an empty set.
///
/// # Example
///
/// ```
/// use luma_transfer::{best_match, LuminanceStats, Sample};
///
/// let samples = [
///     Sample { x: 0, y: 0, stats: LuminanceStats::new(0.2, 0.0) },
///     Sample { x: 1, y: 0, stats: LuminanceStats::new(0.8, 0.0) },
///     Sample { x: 2, y: 0, stats: LuminanceStats::new(0.2, 0.0) },
/// ];
/// let found = best_match(&samples, LuminanceStats::new(0.25, 0.0), 0.5).unwrap();
/// assert_eq!(found.index, 0); // ties go to the lowest index
/// ```
pub fn best_match(samples: &[Sample], query: LuminanceStats, mean_weight: f32) -> Option<Match> {
    samples
        .par_iter()
        .with_min_len(MIN_SAMPLES_PER_TASK)
        .enumerate()
        .map(|(index, s)| Match {
            index,
            cost: match_cost(query, s.stats, mean_weight),
        })
        .reduce_with(closer)
}

fn closer(a: Match, b: Match) -> Match {
    match a.cost.total_cmp(&b.cost).then(a.index.cmp(&b.index)) {
        Ordering::Greater => b,
        _ => a,
    }
}
