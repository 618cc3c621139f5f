//! Resource-usage estimator.
//!
//! Overlap: cosine similarity of the usage vectors.
//! Differentiation: 1 − abs(Pearson r) of the raw vectors, floored at 0.1.

use symbio_core::constants::{DIFFERENTIATION_FLOOR, NORM_EPSILON, NO_VARIANCE_FALLBACK};

use crate::stats;

/// (overlap, differentiation) from two equal-length resource-usage vectors.
pub(crate) fn estimate(a: &[f64], b: &[f64]) -> (f64, f64) {
    let overlap = cosine_overlap(a, b);
    let differentiation = match stats::pearson(a, b) {
        Some(r) => 1.0 - r.abs(),
        None => NO_VARIANCE_FALLBACK,
    };
    (overlap, differentiation.clamp(DIFFERENTIATION_FLOOR, 1.0))
}

/// Cosine similarity with epsilon-guarded norms, clamped to [0, 1].
fn cosine_overlap(a: &[f64], b: &[f64]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = (norm_a.sqrt() + NORM_EPSILON) * (norm_b.sqrt() + NORM_EPSILON);
    (dot / denom).clamp(0.0, 1.0)
}
