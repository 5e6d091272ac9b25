//! Sample position diagnostics.

use crate::color::Srgb;
use crate::sampling::Sample;

/// Color painted over sampled positions: pure red.
pub const SAMPLE_MARKER: [u8; 3] = [255, 0, 0];

/// Copy of `source` with every sample position painted [`SAMPLE_MARKER`].
///
/// Sample positions must lie inside the `width`-wide source.
pub fn render_sample_overlay(source: &[Srgb], width: usize, samples: &[Sample]) -> Vec<Srgb> {
    let [r, g, b] = SAMPLE_MARKER;
    let marker = Srgb::from_u8(r, g, b);
    let mut overlay = source.to_vec();
    for s in samples {
        overlay[s.y * width + s.x] = marker;
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LuminanceStats;

    #[test]
    fn test_marks_only_sampled_pixels() {
        let source = vec![Srgb::grey(100); 6];
        let samples = [
            Sample {
                x: 2,
                y: 0,
                stats: LuminanceStats::default(),
            },
            Sample {
                x: 1,
                y: 1,
                stats: LuminanceStats::default(),
            },
        ];
        let overlay = render_sample_overlay(&source, 3, &samples);
        let bytes: Vec<[u8; 3]> = overlay.iter().map(|c| c.to_bytes()).collect();
        assert_eq!(
            bytes,
            vec![
                [100, 100, 100],
                [100, 100, 100],
                [255, 0, 0],
                [100, 100, 100],
                [255, 0, 0],
                [100, 100, 100],
            ]
        );
    }
}
