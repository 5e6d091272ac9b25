//! Pixel buffers the engine works on.
//!
//! - [`LabImage`]: a fixed-size, row-major grid of [`Lab`](crate::Lab) pixels
//! - [`Rect`]: an axis-aligned pixel rectangle (swatches, crops)
//! - [`ColorMask`]: a boolean plane recording which pixels already carry color

mod lab_image;
mod mask;
mod rect;

pub use lab_image::LabImage;
pub use mask::ColorMask;
pub use rect::Rect;
