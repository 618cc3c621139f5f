//! Temporal-activity estimator.
//!
//! Overlap: abs(Pearson r) of the min-max normalized series.
//! Differentiation: separation of the two activity peaks, as a fraction of
//! the series length, floored at 0.1.

use symbio_core::constants::{DIFFERENTIATION_FLOOR, NO_VARIANCE_FALLBACK};

use crate::stats;

/// (overlap, differentiation) from two equal-length activity time series.
pub(crate) fn estimate(a: &[f64], b: &[f64]) -> (f64, f64) {
    let norm_a = stats::min_max_normalize(a);
    let norm_b = stats::min_max_normalize(b);

    let overlap = match stats::pearson(&norm_a, &norm_b) {
        Some(r) => r.abs(),
        None => NO_VARIANCE_FALLBACK,
    };

    let peak_a = stats::argmax(&norm_a) as f64;
    let peak_b = stats::argmax(&norm_b) as f64;
    let separation = (peak_a - peak_b).abs() / a.len() as f64;

    (overlap, separation.clamp(DIFFERENTIATION_FLOOR, 1.0))
}
