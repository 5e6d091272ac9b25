//! Assertion helpers for tests.

use std::path::Path;

use recolor::imaging::{load_png, RgbImage};

/// Assert the file exists and decodes as a PNG of the given size.
pub fn assert_png_file(path: &Path, width: usize, height: usize) -> RgbImage {
    assert!(path.exists(), "Expected {} to exist", path.display());
    let bytes = std::fs::read(path).expect("Failed to read output");
    assert_eq!(
        &bytes[..8],
        b"\x89PNG\r\n\x1a\n",
        "Expected PNG signature in {}",
        path.display()
    );
    let image = load_png(path).expect("Output should decode");
    assert_eq!(
        (image.width, image.height),
        (width, height),
        "Unexpected size of {}",
        path.display()
    );
    image
}

/// Fraction of pixels whose red channel exceeds the blue one.
pub fn red_dominant_fraction(image: &RgbImage, columns: std::ops::Range<usize>) -> f64 {
    let mut total = 0usize;
    let mut red = 0usize;
    for (i, p) in image.pixels.iter().enumerate() {
        if columns.contains(&(i % image.width)) {
            total += 1;
            let [r, _, b] = p.to_bytes();
            if r > b {
                red += 1;
            }
        }
    }
    red as f64 / total.max(1) as f64
}
