use std::fmt;

use serde::{Deserialize, Serialize};

use super::Regime;

/// Which estimator produced the (overlap, differentiation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    Direct,
    ResourceVectors,
    Temporal,
    Spatial,
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EstimationMethod::Direct => "direct",
            EstimationMethod::ResourceVectors => "resource_vectors",
            EstimationMethod::Temporal => "temporal",
            EstimationMethod::Spatial => "spatial",
        };
        write!(f, "{label}")
    }
}

/// 95% bootstrap confidence interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Result of a single pairwise interaction estimate.
///
/// Invariant: `i_factor == overlap / differentiation` exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Interaction factor: overlap / differentiation.
    pub i_factor: f64,
    /// Resource overlap coefficient, in [0, 1].
    pub overlap: f64,
    /// Service differentiation coefficient, in (0, 1].
    pub differentiation: f64,
    /// Regime classification of the factor.
    pub regime: Regime,
    /// Bootstrap interval, present only when uncertainty analysis ran.
    pub confidence_interval: Option<ConfidenceInterval>,
    /// Estimator that produced the coefficients.
    pub method: EstimationMethod,
}
