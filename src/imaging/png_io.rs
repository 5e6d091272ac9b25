use std::io::{Cursor, Write};
use std::path::Path;

use luma_transfer::Srgb;

use crate::error::ImageError;

/// A decoded image as display-space pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Srgb>,
}

impl RgbImage {
    /// Packed 8-bit RGB, 3 bytes per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

/// Decode a PNG of any color type and bit depth.
///
/// Palettes and low bit depths are expanded, 16-bit channels are stripped to
/// 8 bits, and transparency is composited against white.
pub fn decode_png(bytes: &[u8]) -> Result<RgbImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Unsupported(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let (width, height) = (info.width as usize, info.height as usize);
    let (channels, to_srgb): (usize, fn(&[u8]) -> Srgb) = match info.color_type {
        png::ColorType::Grayscale => (1, |p| Srgb::grey(p[0])),
        png::ColorType::GrayscaleAlpha => (2, |p| Srgb::grey(over_white(p[0], p[1]))),
        png::ColorType::Rgb => (3, |p| Srgb::from_u8(p[0], p[1], p[2])),
        png::ColorType::Rgba => (4, |p| {
            Srgb::from_u8(
                over_white(p[0], p[3]),
                over_white(p[1], p[3]),
                over_white(p[2], p[3]),
            )
        }),
        png::ColorType::Indexed => {
            return Err(ImageError::Unsupported(
                "indexed color was not expanded".to_string(),
            ))
        }
    };
    // rows may be padded to the line size
    let mut pixels = Vec::with_capacity(width * height);
    for row in data.chunks(info.line_size).take(height) {
        pixels.extend(row[..width * channels].chunks_exact(channels).map(to_srgb));
    }

    Ok(RgbImage {
        width,
        height,
        pixels,
    })
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<RgbImage, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

/// Encode packed 8-bit RGB as a PNG in memory.
pub fn encode_png(width: usize, height: usize, rgb: &[u8]) -> Result<Vec<u8>, ImageError> {
    let w = u32::try_from(width)
        .map_err(|_| ImageError::Unsupported(format!("width {width} too large for PNG")))?;
    let h = u32::try_from(height)
        .map_err(|_| ImageError::Unsupported(format!("height {height} too large for PNG")))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, w, h);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode fully in memory, write a temporary file beside `path` and rename
/// it into place. A failed save never leaves a partial file at `path`.
pub fn save_png(path: &Path, width: usize, height: usize, rgb: &[u8]) -> Result<(), ImageError> {
    let bytes = encode_png(width, height, rgb)?;
    let write_error = |source: std::io::Error| ImageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(&bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    // the temporary file is removed when `persist` fails
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}

/// Composite a straight-alpha channel value against white.
fn over_white(v: u8, a: u8) -> u8 {
    match a {
        255 => v,
        0 => 255,
        _ => {
            let af = a as u16;
            ((v as u16 * af + 255 * (255 - af)) / 255) as u8
        }
    }
}
