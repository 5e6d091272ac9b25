//! Luminance statistics.
//!
//! - [`neighborhood_stats`]: local mean/stddev over a clipped window
//! - [`remap_luminance`]: align the source luminance distribution with the
//!   target's before any matching happens

mod luminance;
mod neighborhood;

pub use luminance::{remap_luminance, RemapReport, DEGENERATE_STD_DEV};
pub use neighborhood::{neighborhood_stats, LuminanceStats, Window};
