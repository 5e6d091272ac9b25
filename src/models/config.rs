use std::path::{Path, PathBuf};

use std::fmt::Display;
use std::str::FromStr;

use luma_transfer::{
    ParseOptionError, PerceptualSpace, Rect, SamplingMethod, SwatchPair, TransferOptions,
};
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Run configuration loaded from a YAML file.
///
/// Every key is optional; missing keys take the library defaults. Command
/// line flags override whatever the file sets.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Neighborhood window size
    pub window_size: usize,

    /// Source sample budget of a whole-image run
    pub samples: usize,

    /// "jittered" or "brute-force"
    #[serde(deserialize_with = "from_name")]
    pub sampling: SamplingMethod,

    /// Weight of the mean in the match cost, 0..=1
    pub mean_weight: f32,

    /// Sample budget of each swatch
    pub swatch_samples: usize,

    /// Patch size compared during swatch diffusion
    pub diffusion_window: usize,

    /// Jitter seed
    pub seed: u64,

    /// "oklab" or "cielab"
    #[serde(deserialize_with = "from_name")]
    pub color_space: PerceptualSpace,

    /// Write a sample overlay next to the destination
    pub show_samples: bool,

    /// Trace every pixel's match
    pub verbose: bool,

    /// Source/target rectangle pairs, `[x, y, width, height]` each
    pub swatches: Vec<SwatchConfig>,
}

/// One swatch pair as written in the config file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SwatchConfig {
    pub source: [usize; 4],
    pub target: [usize; 4],
}

impl From<SwatchConfig> for SwatchPair {
    fn from(swatch: SwatchConfig) -> Self {
        let rect = |[x, y, w, h]: [usize; 4]| Rect::new(x, y, w, h);
        SwatchPair {
            source: rect(swatch.source),
            target: rect(swatch.target),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        let defaults = TransferOptions::default();
        Self {
            window_size: defaults.window_size,
            samples: defaults.sample_count,
            sampling: defaults.sampling,
            mean_weight: defaults.mean_weight,
            swatch_samples: defaults.swatch_sample_count,
            diffusion_window: defaults.diffusion_window,
            seed: defaults.seed,
            color_space: PerceptualSpace::default(),
            show_samples: defaults.show_samples,
            verbose: defaults.verbose,
            swatches: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file.
    ///
    /// Unlike a long-running service, a one-shot run never falls back to
    /// defaults on a broken file: a typo would silently change the result.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            swatches = config.swatches.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string. An empty document yields
    /// the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The library options this file describes.
    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions::new()
            .window_size(self.window_size)
            .sample_count(self.samples)
            .sampling(self.sampling)
            .mean_weight(self.mean_weight)
            .swatch_sample_count(self.swatch_samples)
            .diffusion_window(self.diffusion_window)
            .seed(self.seed)
            .show_samples(self.show_samples)
            .verbose(self.verbose)
    }

    pub fn swatch_pairs(&self) -> Vec<SwatchPair> {
        self.swatches.iter().copied().map(SwatchPair::from).collect()
    }
}

/// Deserialize an option value through its `FromStr` name, so a bad name
/// is reported by serde together with its location in the file.
fn from_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Parse a command line swatch pair: `x,y,w,h:x,y,w,h` (source, then target).
pub fn parse_swatch_pair(s: &str) -> Result<SwatchPair, ParseOptionError> {
    let (source, target) = s
        .split_once(':')
        .ok_or_else(|| ParseOptionError::InvalidRect(s.to_string()))?;
    Ok(SwatchPair {
        source: source.parse()?,
        target: target.parse()?,
    })
}

/// `<dir>/<stem>-samples.png` beside the destination.
pub fn sample_overlay_path(destination: &Path) -> PathBuf {
    let stem = destination
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    destination.with_file_name(format!("{stem}-samples.png"))
}
