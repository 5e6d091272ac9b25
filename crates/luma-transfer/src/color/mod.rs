//! Color types and the color-space capability.
//!
//! The engine only ever computes on [`Lab`] pixels: one luminance channel and
//! two chrominance channels. How display colors get there is the job of a
//! [`ColorSpace`] implementation.
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded display color, used for I/O.
//! - [`LinearRgb`]: linear light, the common intermediate of both conversions.
//! - [`PerceptualSpace::Oklab`]: Ottosson's Oklab (default).
//! - [`PerceptualSpace::CieLab`]: CIE L*a*b* under a D65 white point.
//!
//! # Example
//!
//! ```
//! use luma_transfer::{ColorSpace, PerceptualSpace, Srgb};
//!
//! let space = PerceptualSpace::Oklab;
//! let orange = Srgb::from_u8(230, 120, 20);
//! let lab = space.to_perceptual(orange);
//! assert_eq!(space.to_display(lab).to_bytes(), [230, 120, 20]);
//! ```

mod cielab;
mod lab;
mod linear_rgb;
mod oklab;
mod space;
mod srgb;

pub use cielab::CieLabSpace;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use oklab::OklabSpace;
pub use space::{ColorSpace, PerceptualSpace};
pub use srgb::Srgb;
