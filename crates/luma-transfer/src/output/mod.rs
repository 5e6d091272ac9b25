//! Output types of a colorization run.
//!
//! [`Colorized`] holds the colorized target in display space together with
//! what the run sampled. When sample display is requested it also carries a
//! diagnostic copy of the source with every sampled position marked (see
//! [`render_sample_overlay`]).

mod colorized;
mod overlay;

pub use colorized::Colorized;
pub use overlay::{render_sample_overlay, SAMPLE_MARKER};
