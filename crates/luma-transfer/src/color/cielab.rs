//! CIE L*a*b* color space (D65 white point).
//!
//! Lightness `l` runs from 0 to 100 and `a`/`b` roughly from -128 to 127.
//! The absolute scale differs from Oklab, so the match cost and the
//! diffusion patch distance are not comparable across the two spaces.

use super::lab::Lab;
use super::linear_rgb::LinearRgb;
use super::space::ColorSpace;
use super::srgb::Srgb;

// D65 reference white
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

const DELTA: f32 = 6.0 / 29.0;

/// The CIE L*a*b* color space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CieLabSpace;

impl CieLabSpace {
    /// Linear sRGB to L*a*b*.
    pub fn from_linear(rgb: LinearRgb) -> Lab {
        let x = 0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b;
        let y = 0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175 * rgb.b;
        let z = 0.019_333_9 * rgb.r + 0.119_192 * rgb.g + 0.950_304_1 * rgb.b;

        let fx = forward(x / WHITE_X);
        let fy = forward(y / WHITE_Y);
        let fz = forward(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// L*a*b* to linear sRGB. The result is not clamped.
    pub fn to_linear(lab: Lab) -> LinearRgb {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = WHITE_X * inverse(fx);
        let y = WHITE_Y * inverse(fy);
        let z = WHITE_Z * inverse(fz);

        LinearRgb {
            r: 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z,
            g: -0.969_266 * x + 1.876_010_8 * y + 0.041_556 * z,
            b: 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z,
        }
    }
}

#[inline]
fn forward(t: f32) -> f32 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn inverse(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl ColorSpace for CieLabSpace {
    fn name(&self) -> &'static str {
        "cielab"
    }

    fn to_perceptual(&self, color: Srgb) -> Lab {
        Self::from_linear(LinearRgb::from(color))
    }

    fn to_display(&self, lab: Lab) -> Srgb {
        Srgb::from(Self::to_linear(lab))
    }
}
