//! Peak signal-to-noise ratio between two 8-bit images.

use crate::error::TransferError;

/// PSNR reported for identical images, where the ratio is unbounded.
pub const PSNR_IDENTICAL: f64 = 100.0;

/// PSNR in decibels over every channel byte: `20 * log10(255 / sqrt(mse))`.
///
/// Both buffers must hold the same number of bytes.
///
/// ```
/// use luma_transfer::quality::psnr;
///
/// let a = [10u8, 20, 30];
/// assert_eq!(psnr(&a, &a).unwrap(), 100.0);
/// assert!(psnr(&a, &[12, 20, 30]).unwrap() < 100.0);
/// ```
pub fn psnr(reference: &[u8], candidate: &[u8]) -> Result<f64, TransferError> {
    if reference.len() != candidate.len() {
        return Err(TransferError::DimensionMismatch {
            expected: reference.len(),
            actual: candidate.len(),
        });
    }
    if reference.is_empty() {
        return Err(TransferError::EmptyImage {
            width: 0,
            height: 0,
        });
    }
    let sum: f64 = reference
        .iter()
        .zip(candidate)
        .map(|(&a, &b)| {
            let d = a as f64 - b as f64;
            d * d
        })
        .sum();
    let mse = sum / reference.len() as f64;
    if mse == 0.0 {
        return Ok(PSNR_IDENTICAL);
    }
    Ok(20.0 * (255.0 / mse.sqrt()).log10())
}
