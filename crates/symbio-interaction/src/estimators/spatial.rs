//! Spatial-distribution estimator.
//!
//! Overlap: histogram intersection of the mass-normalized distributions.
//! Differentiation: separation of the distributions' centers of mass over
//! flat index positions, as a fraction of length, floored at 0.1.

use symbio_core::constants::{DIFFERENTIATION_FLOOR, NORM_EPSILON};

/// (overlap, differentiation) from two equal-length flattened distributions.
pub(crate) fn estimate(a: &[f64], b: &[f64]) -> (f64, f64) {
    let mass_a = mass_normalize(a);
    let mass_b = mass_normalize(b);

    let overlap: f64 = mass_a.iter().zip(&mass_b).map(|(x, y)| x.min(*y)).sum();

    let separation =
        (center_of_mass(&mass_a) - center_of_mass(&mass_b)).abs() / a.len() as f64;

    (overlap, separation.clamp(DIFFERENTIATION_FLOOR, 1.0))
}

/// Scale a distribution to unit probability mass, epsilon-guarded.
fn mass_normalize(xs: &[f64]) -> Vec<f64> {
    let total = xs.iter().sum::<f64>() + NORM_EPSILON;
    xs.iter().map(|x| x / total).collect()
}

/// First moment of the mass over flat index positions.
fn center_of_mass(mass: &[f64]) -> f64 {
    mass.iter()
        .enumerate()
        .map(|(i, m)| i as f64 * m)
        .sum()
}
