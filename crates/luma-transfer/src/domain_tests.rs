//! Domain-critical regression tests for luma-transfer.
//!
//! Each test names the class of bug it guards against rather than just
//! confirming a happy path.

use pretty_assertions::assert_eq;

use crate::api::Colorizer;
use crate::color::{ColorSpace, Lab, PerceptualSpace, Srgb};
use crate::error::{ErrorKind, TransferError};
use crate::image::{LabImage, Rect};
use crate::matching::{best_match, match_cost};
use crate::options::TransferOptions;
use crate::sampling::{cell_span, grid_size, seeded_rng, BruteForce, Jittered, SampleSelector, SamplingMethod};
use crate::stats::{neighborhood_stats, remap_luminance, LuminanceStats};
use crate::swatch::{SwatchCoordinator, SwatchSet};
use crate::transfer::colorize_pair;

/// Deterministic pseudo-random texture, no RNG involved.
fn texture(width: usize, height: usize, salt: usize) -> LabImage {
    let pixels = (0..width * height)
        .map(|i| {
            let h = (i.wrapping_mul(2_654_435_761) ^ salt.wrapping_mul(40_503)) % 1000;
            let l = 0.15 + 0.7 * (h as f32 / 1000.0);
            Lab::new(l, 0.08 * (l - 0.5), 0.04 - 0.1 * l)
        })
        .collect();
    LabImage::new(pixels, width, height).unwrap()
}

fn srgb_texture(width: usize, height: usize) -> Vec<Srgb> {
    (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            Srgb::from_u8((x * 11 % 256) as u8, (y * 7 % 256) as u8, ((x + y) * 5 % 256) as u8)
        })
        .collect()
}

fn srgb_gray(width: usize, height: usize) -> Vec<Srgb> {
    (0..width * height)
        .map(|i| Srgb::grey(((i * 37) % 251) as u8))
        .collect()
}

// ============================================================================
// Transfer semantics
// ============================================================================

/// If this breaks, it means: a single-pixel source no longer hands its
/// chrominance to the target, e.g. because sampling or matching mishandles
/// the degenerate 1x1 window.
#[test]
fn test_one_pixel_end_to_end() {
    let options = TransferOptions::default();
    let mut source = LabImage::new(vec![Lab::new(0.6, 0.05, -0.03)], 1, 1).unwrap();
    let mut target = LabImage::new(vec![Lab::new(0.3, 0.0, 0.0)], 1, 1).unwrap();

    colorize_pair(
        &options,
        &mut source,
        &mut target,
        options.sample_count,
        &mut seeded_rng(0, 0),
    )
    .unwrap();

    let p = target.get(0, 0);
    assert_eq!((p.a, p.b), (0.05, -0.03));
    assert_eq!(p.l, 0.3);
}

/// If this breaks, it means: chrominance transfer writes luminance too, so
/// the output no longer keeps the structure of the grayscale input.
#[test]
fn test_target_luminance_never_modified() {
    for method in [SamplingMethod::Jittered, SamplingMethod::BruteForce] {
        let options = TransferOptions::new().sampling(method).window_size(3);
        let mut source = texture(24, 16, 1);
        let mut target = texture(20, 20, 2);
        let before: Vec<f32> = target.pixels().iter().map(|p| p.l).collect();

        colorize_pair(&options, &mut source, &mut target, 100, &mut seeded_rng(4, 0)).unwrap();

        let after: Vec<f32> = target.pixels().iter().map(|p| p.l).collect();
        assert_eq!(before, after, "{method:?} changed target luminance");
    }
}

/// If this breaks, it means: the remap formula or the statistics disagree,
/// and matching compares source and target on different brightness scales.
#[test]
fn test_remap_aligns_global_statistics() {
    let mut source = texture(30, 10, 3);
    for p in source.pixels_mut() {
        p.l = 0.8 * p.l + 0.15;
    }
    let target = texture(12, 12, 4);

    let report = remap_luminance(&mut source, &target);

    let after = LuminanceStats::of_image(&source);
    let expected = LuminanceStats::of_image(&target);
    assert!(!report.degenerate);
    assert!((after.mean - expected.mean).abs() < 1e-4);
    assert!((after.std_dev - expected.std_dev).abs() < 1e-4);
}

/// If this breaks, it means: a flat source divides by zero in the remap and
/// NaN luminance propagates into every match.
#[test]
fn test_flat_source_stays_finite() {
    let options = TransferOptions::default();
    let mut source = LabImage::new(vec![Lab::new(0.5, 0.02, 0.02); 64], 8, 8).unwrap();
    let mut target = texture(8, 8, 5);

    let outcome =
        colorize_pair(&options, &mut source, &mut target, 64, &mut seeded_rng(0, 0)).unwrap();

    assert!(outcome.remap.degenerate);
    assert!(source.pixels().iter().all(|p| p.l.is_finite()));
    assert!(target.pixels().iter().all(|p| (p.a, p.b) == (0.02, 0.02)));
}

// ============================================================================
// Sampling and matching
// ============================================================================

/// If this breaks, it means: brute-force sampling skips or repeats pixels
/// (e.g. by mixing up rows and columns), so a full-budget run is no longer
/// equivalent to an exhaustive scan of the source.
#[test]
fn test_full_brute_force_equals_exhaustive_scan() {
    let (width, height, window) = (13, 7, 3);
    let source = texture(width, height, 6);
    let samples = BruteForce
        .select(&source, width * height, window, &mut seeded_rng(0, 0))
        .unwrap();
    assert_eq!(samples.len(), width * height);

    for k in 0..40 {
        let query = LuminanceStats::new(0.1 + k as f32 / 50.0, (k % 5) as f32 / 25.0);
        let found = best_match(&samples, query, 0.5).unwrap();

        let mut best = (0, 0);
        let mut best_cost = f32::INFINITY;
        for y in 0..height {
            for x in 0..width {
                let cost = match_cost(query, neighborhood_stats(&source, x, y, window), 0.5);
                if cost < best_cost {
                    best_cost = cost;
                    best = (x, y);
                }
            }
        }
        let s = samples[found.index];
        assert_eq!((s.x, s.y), best, "query {query:?}");
        assert_eq!(found.cost, best_cost);
    }
}

/// If this breaks, it means: jittered sampling lost its one-sample-per-cell
/// stratification, or stopped truncating non-square budgets.
#[test]
fn test_jittered_is_stratified() {
    let image = texture(50, 31, 7);
    for count in [2, 10, 99, 225, 256, 1000] {
        let samples = Jittered
            .select(&image, count, 5, &mut seeded_rng(count as u64, 0))
            .unwrap();
        let n = grid_size(count);
        assert_eq!(samples.len(), n * n);
        for (i, s) in samples.iter().enumerate() {
            assert!(cell_span(50, n, i % n).contains(&s.x));
            assert!(cell_span(31, n, i / n).contains(&s.y));
            assert_eq!(s.stats, neighborhood_stats(&image, s.x, s.y, 5));
        }
    }
}

/// If this breaks, it means: the parallel minimum search depends on thread
/// scheduling, so identical runs produce different images.
#[test]
fn test_same_result_on_any_thread_count() {
    let source = srgb_texture(40, 30);
    let target = srgb_gray(35, 25);
    let swatches = SwatchSet::new(
        vec![Rect::new(0, 0, 20, 15), Rect::new(20, 15, 20, 15)],
        vec![Rect::new(0, 0, 10, 10), Rect::new(20, 10, 15, 15)],
    )
    .unwrap();
    let colorizer = Colorizer::new().seed(17).show_samples(true);

    let run = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        pool.install(|| {
            let whole = colorizer.colorize(&source, 40, 30, &target, 35, 25).unwrap();
            let swatched = colorizer
                .colorize_with_swatches(&source, 40, 30, &target, 35, 25, &swatches)
                .unwrap();
            (
                whole.to_rgb8(),
                whole.samples().to_vec(),
                swatched.to_rgb8(),
                swatched.overlay_rgb8(),
            )
        })
    };

    assert_eq!(run(1), run(4));
}

// ============================================================================
// Swatches
// ============================================================================

/// If this breaks, it means: a swatch list mismatch is detected late (or
/// not at all) instead of before any image is touched.
#[test]
fn test_swatch_count_mismatch_is_configuration_error() {
    let err = SwatchSet::new(
        vec![Rect::new(0, 0, 2, 2)],
        vec![Rect::new(0, 0, 2, 2), Rect::new(2, 2, 2, 2)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TransferError::SwatchCountMismatch {
            source_count: 1,
            target_count: 2
        }
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// If this breaks, it means: "already colorized" is detected from pixel
/// values again, so a swatch that legitimately colorized to neutral gray is
/// overwritten by diffusion.
#[test]
fn test_neutral_swatch_counts_as_colorized() {
    let options = TransferOptions::new().swatch_sample_count(16);
    let source = LabImage::new(vec![Lab::new(0.5, 0.0, 0.0); 100], 10, 10).unwrap();
    let mut target = texture(10, 10, 8);
    for p in target.pixels_mut() {
        p.a = 0.0;
        p.b = 0.0;
    }

    let report = SwatchCoordinator::new(&options)
        .run(
            &source,
            &mut target,
            &SwatchSet::new(vec![Rect::new(0, 0, 5, 5)], vec![Rect::new(2, 2, 4, 4)]).unwrap(),
        )
        .unwrap();

    assert_eq!(report.diffused_pixels, 100 - 16);
}

// ============================================================================
// Resource limits
// ============================================================================

/// If this breaks, it means: a huge sample budget overflows the jitter grid
/// arithmetic (panic in debug, endless loop in release) instead of being
/// reported as a failed allocation.
#[test]
fn test_huge_sample_budget_is_allocation_error() {
    let source = srgb_texture(4, 4);
    let target = srgb_gray(4, 4);

    let err = Colorizer::new()
        .samples(usize::MAX)
        .colorize(&source, 4, 4, &target, 4, 4)
        .unwrap_err();
    assert!(matches!(err, TransferError::Allocation { .. }), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Resource);

    // brute force caps the budget at the pixel count
    assert!(Colorizer::new()
        .samples(usize::MAX)
        .sampling(SamplingMethod::BruteForce)
        .colorize(&source, 4, 4, &target, 4, 4)
        .is_ok());

    let swatches = SwatchSet::new(vec![Rect::new(0, 0, 2, 2)], vec![Rect::new(1, 1, 2, 2)]).unwrap();
    let err = Colorizer::new()
        .options(TransferOptions::new().swatch_sample_count(usize::MAX))
        .colorize_with_swatches(&source, 4, 4, &target, 4, 4, &swatches)
        .unwrap_err();
    assert!(matches!(err, TransferError::Allocation { .. }), "{err:?}");
}

// ============================================================================
// Color space
// ============================================================================

/// If this breaks, it means: a color space no longer round-trips, so even an
/// untouched pixel comes back with a different color.
#[test]
fn test_color_spaces_round_trip_within_one_code_value() {
    for space in [PerceptualSpace::Oklab, PerceptualSpace::CieLab] {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let back = space
                        .to_display(space.to_perceptual(Srgb::from_u8(r, g, b)))
                        .to_bytes();
                    for (got, want) in back.iter().zip([r, g, b]) {
                        assert!(
                            got.abs_diff(want) <= 1,
                            "{} round trip of ({r}, {g}, {b}) gave {back:?}",
                            space.name()
                        );
                    }
                }
            }
        }
    }
}
