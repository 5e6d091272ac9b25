//! Test images written to a scratch directory.

use std::path::{Path, PathBuf};

use recolor::imaging::encode_png;
use tempfile::TempDir;

/// A temporary directory holding test PNGs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write packed RGB bytes as a PNG and return its path.
    pub fn write_rgb(&self, name: &str, width: usize, height: usize, rgb: &[u8]) -> PathBuf {
        let path = self.path(name);
        let bytes = encode_png(width, height, rgb).expect("Failed to encode fixture");
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Reference with a bright red left half and a dark blue right half,
    /// plus a slight ramp down the rows.
    pub fn write_reference(&self, name: &str, width: usize, height: usize) -> PathBuf {
        self.write_rgb(name, width, height, &reference_rgb(width, height))
    }

    /// Grayscale rendering of the reference layout.
    pub fn write_gray(&self, name: &str, width: usize, height: usize) -> PathBuf {
        let rgb: Vec<u8> = reference_rgb(width, height)
            .chunks_exact(3)
            .flat_map(|p| {
                let l = ((p[0] as u32 * 30 + p[1] as u32 * 59 + p[2] as u32 * 11) / 100) as u8;
                [l, l, l]
            })
            .collect();
        self.write_rgb(name, width, height, &rgb)
    }

    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub fn reference_rgb(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .flat_map(|i| {
            let (x, y) = (i % width, i / width);
            let ramp = (y * 40 / height.max(1)) as u8;
            if x < width / 2 {
                [200 + ramp, 80, 60]
            } else {
                [20, 30, 60 + ramp]
            }
        })
        .collect()
}
