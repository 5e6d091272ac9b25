pub mod config;

pub use config::{parse_swatch_pair, sample_overlay_path, RunConfig, SwatchConfig};
