// Color conversion matrices are quoted at full published precision
#![allow(clippy::excessive_precision)]

//! luma-transfer: colorize grayscale images from a color reference
//!
//! Color is transferred by matching the luminance statistics of pixel
//! neighborhoods: every target pixel takes the chrominance of the source
//! sample whose local mean and standard deviation of luminance are closest
//! to its own. Only luminance is compared, so the target can be any
//! grayscale image and the source any color image of similar content.
//!
//! # Quick Start
//!
//! ```
//! use luma_transfer::{Colorizer, Srgb};
//!
//! let source = vec![Srgb::from_u8(180, 120, 60); 16];
//! let target = vec![Srgb::grey(100); 16];
//!
//! let result = Colorizer::new().colorize(&source, 4, 4, &target, 4, 4).unwrap();
//! assert_eq!(result.pixels().len(), 16);
//! ```
//!
//! # Pipeline
//!
//! 1. Both images are converted into a perceptual space ([`ColorSpace`]).
//! 2. The source luminance is remapped so its global mean and standard
//!    deviation equal the target's ([`remap_luminance`]).
//! 3. A fixed sample set is drawn from the source ([`SamplingMethod`]).
//! 4. Each target pixel is matched against the samples ([`best_match`]) and
//!    takes the matched source pixel's chrominance ([`ColorTransferEngine`]).
//! 5. The target is converted back to display space.
//!
//! With swatches ([`SwatchSet`]), steps 2 to 4 run once per paired region
//! and the rest of the target is filled by diffusion ([`SwatchCoordinator`]).
//!
//! # Match Cost
//!
//! ```text
//! cost = w * (q.mean - s.mean)^2 + (1 - w) * (q.std_dev - s.std_dev)^2
//! ```
//!
//! `w` is [`TransferOptions::mean_weight`]. A high weight favors matching
//! brightness; a low weight favors matching texture. Exact ties resolve to
//! the lowest sample index, on any number of threads.
//!
//! # Determinism
//!
//! All randomness comes from ChaCha8 streams keyed by
//! [`TransferOptions::seed`]. Given the same inputs and options the output
//! is bit-identical regardless of the rayon thread count.

pub mod api;
pub mod color;
pub mod error;
pub mod image;
pub mod matching;
pub mod options;
pub mod output;
pub mod quality;
pub mod sampling;
pub mod stats;
pub mod swatch;
pub mod transfer;

#[cfg(test)]
mod domain_tests;

pub use api::Colorizer;
pub use color::{CieLabSpace, ColorSpace, Lab, LinearRgb, OklabSpace, PerceptualSpace, Srgb};
pub use error::{ErrorKind, ParseOptionError, SwatchSide, TransferError};
pub use image::{ColorMask, LabImage, Rect};
pub use matching::{best_match, match_cost, Match};
pub use options::TransferOptions;
pub use output::Colorized;
pub use sampling::{BruteForce, Jittered, Sample, SampleSelector, SamplingMethod};
pub use stats::{neighborhood_stats, remap_luminance, LuminanceStats, RemapReport};
pub use swatch::{SwatchCoordinator, SwatchPair, SwatchReport, SwatchSet};
pub use transfer::{ColorTransferEngine, TransferReport};
