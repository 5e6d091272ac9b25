//! Public entry point of the crate.
//!
//! [`Colorizer`] takes display-space pixels in and hands a
//! [`Colorized`](crate::output::Colorized) image back, running the whole
//! pipeline in between.

mod builder;

pub use builder::Colorizer;
