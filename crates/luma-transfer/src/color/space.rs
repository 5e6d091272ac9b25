//! The color-space capability consumed by the engine.

use std::str::FromStr;

use super::cielab::CieLabSpace;
use super::lab::Lab;
use super::oklab::OklabSpace;
use super::srgb::Srgb;
use crate::error::ParseOptionError;

/// Conversion between display colors and a luminance/chrominance separated
/// perceptual space.
///
/// Implementations must round-trip: `to_display(to_perceptual(c))` reproduces
/// every 8-bit sRGB color within one code value per channel.
pub trait ColorSpace: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Display color to perceptual pixel.
    fn to_perceptual(&self, color: Srgb) -> Lab;

    /// Perceptual pixel back to display color, clamped into the sRGB gamut.
    fn to_display(&self, lab: Lab) -> Srgb;
}

/// Built-in perceptual spaces, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerceptualSpace {
    /// Oklab (default).
    #[default]
    Oklab,
    /// CIE L*a*b* with a D65 white point.
    CieLab,
}

impl ColorSpace for PerceptualSpace {
    fn name(&self) -> &'static str {
        match self {
            PerceptualSpace::Oklab => OklabSpace.name(),
            PerceptualSpace::CieLab => CieLabSpace.name(),
        }
    }

    #[inline]
    fn to_perceptual(&self, color: Srgb) -> Lab {
        match self {
            PerceptualSpace::Oklab => OklabSpace.to_perceptual(color),
            PerceptualSpace::CieLab => CieLabSpace.to_perceptual(color),
        }
    }

    #[inline]
    fn to_display(&self, lab: Lab) -> Srgb {
        match self {
            PerceptualSpace::Oklab => OklabSpace.to_display(lab),
            PerceptualSpace::CieLab => CieLabSpace.to_display(lab),
        }
    }
}

impl FromStr for PerceptualSpace {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oklab" => Ok(PerceptualSpace::Oklab),
            "cielab" | "lab" => Ok(PerceptualSpace::CieLab),
            _ => Err(ParseOptionError::Unknown {
                what: "color space",
                value: s.to_string(),
                expected: "oklab, cielab",
            }),
        }
    }
}
