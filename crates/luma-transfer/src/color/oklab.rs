//! Oklab perceptual color space
//!
//! Oklab separates lightness from chroma with a perceptually uniform scale,
//! which makes luminance statistics meaningful and lets chrominance be moved
//! between pixels without shifting their brightness.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::lab::Lab;
use super::linear_rgb::LinearRgb;
use super::space::ColorSpace;
use super::srgb::Srgb;

/// The Oklab color space. Luminance `l` runs from 0.0 (black) to 1.0 (white);
/// `a` and `b` are roughly within -0.5..=0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OklabSpace;

impl OklabSpace {
    /// Linear sRGB to Oklab, using the 2021-01-25 matrices.
    pub fn from_linear(rgb: LinearRgb) -> Lab {
        let l = 0.412_221_46 * rgb.r + 0.536_332_55 * rgb.g + 0.051_445_995 * rgb.b;
        let m = 0.211_903_5 * rgb.r + 0.680_699_5 * rgb.g + 0.107_396_96 * rgb.b;
        let s = 0.088_302_46 * rgb.r + 0.281_718_85 * rgb.g + 0.629_978_7 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Lab {
            l: 0.210_454_26 * l_ + 0.793_617_8 * m_ - 0.004_072_047 * s_,
            a: 1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_,
            b: 0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_,
        }
    }

    /// Oklab to linear sRGB. The result is not clamped.
    pub fn to_linear(lab: Lab) -> LinearRgb {
        let l_ = lab.l + 0.396_337_78 * lab.a + 0.215_803_76 * lab.b;
        let m_ = lab.l - 0.105_561_346 * lab.a - 0.063_854_17 * lab.b;
        let s_ = lab.l - 0.089_484_18 * lab.a - 1.291_485_5 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        LinearRgb {
            r: 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s,
            g: -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s,
            b: -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s,
        }
    }
}

impl ColorSpace for OklabSpace {
    fn name(&self) -> &'static str {
        "oklab"
    }

    fn to_perceptual(&self, color: Srgb) -> Lab {
        Self::from_linear(LinearRgb::from(color))
    }

    fn to_display(&self, lab: Lab) -> Srgb {
        Srgb::from(Self::to_linear(lab))
    }
}
