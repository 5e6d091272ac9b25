//! Color diffusion from swatches into the rest of the target.
//!
//! Every pixel that no swatch covered is compared against a pool of
//! colorized positions by direct patch distance, and takes the chrominance
//! of the closest one. The search is exhaustive over the pool.

use rayon::prelude::*;

use crate::image::{ColorMask, LabImage};
use crate::sampling::Sample;

/// Sum of squared luminance differences between the patches around `query`
/// and `candidate`.
///
/// Offsets run over a `window x window` square. Only offsets that stay inside
/// the image for both positions contribute, so the compared region is the
/// window clipped to both neighborhoods.
pub fn patch_distance(
    image: &LabImage,
    query: (usize, usize),
    candidate: (usize, usize),
    window: usize,
) -> f32 {
    let lo = -((window / 2) as isize);
    let hi = lo + window as isize;
    let (w, h) = (image.width() as isize, image.height() as isize);
    let inside = |v: isize, extent: isize| (0..extent).contains(&v);

    let (qx, qy) = (query.0 as isize, query.1 as isize);
    let (cx, cy) = (candidate.0 as isize, candidate.1 as isize);

    let mut sum = 0.0f32;
    for dy in lo..hi {
        let (qy, cy) = (qy + dy, cy + dy);
        if !inside(qy, h) || !inside(cy, h) {
            continue;
        }
        for dx in lo..hi {
            let (qx, cx) = (qx + dx, cx + dx);
            if !inside(qx, w) || !inside(cx, w) {
                continue;
            }
            let d = image.luminance(qx as usize, qy as usize)
                - image.luminance(cx as usize, cy as usize);
            sum += d * d;
        }
    }
    sum
}

/// Color every pixel not set in `mask` from the closest `pool` position.
///
/// Pool positions must already be colorized. Among equally close
/// candidates the lowest pool index wins. Afterwards every pixel of the
/// mask is set. Returns the number of pixels that were colored.
pub fn diffuse(
    target: &mut LabImage,
    mask: &mut ColorMask,
    pool: &[Sample],
    window: usize,
    verbose: bool,
) -> usize {
    let pending = mask.unset_indices();
    if pending.is_empty() {
        return 0;
    }
    if pool.is_empty() {
        tracing::warn!(
            pixels = pending.len(),
            "no colorized positions to diffuse from; leaving pixels uncolored"
        );
        return 0;
    }

    let picks: Vec<(usize, usize)> = {
        let target: &LabImage = target;
        pending
            .par_iter()
            .map(|&i| {
                let query = target.position(i);
                let mut best = 0;
                let mut best_distance = f32::INFINITY;
                for (k, s) in pool.iter().enumerate() {
                    let d = patch_distance(target, query, (s.x, s.y), window);
                    if d < best_distance {
                        best = k;
                        best_distance = d;
                    }
                }
                if verbose {
                    tracing::trace!(
                        x = query.0,
                        y = query.1,
                        candidate = best,
                        distance = best_distance,
                        "pixel diffused"
                    );
                }
                (i, best)
            })
            .collect()
    };

    for &(i, k) in &picks {
        let s = &pool[k];
        let donor = target.get(s.x, s.y);
        let pixel = &mut target.pixels_mut()[i];
        *pixel = pixel.with_chroma_of(donor);
    }
    mask.fill_all();
    picks.len()
}
