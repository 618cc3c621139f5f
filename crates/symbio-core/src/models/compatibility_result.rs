use serde::{Deserialize, Serialize};

/// Result of compatibility aggregation.
///
/// Invariant: `compatibility` equals the declared weighted sum of the three
/// dimensions within floating-point tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted compatibility coefficient, in [0, 1].
    pub compatibility: f64,
    /// Physical alignment dimension, in [0, 1].
    pub physical: f64,
    /// Service exchange dimension, in [0, 1].
    pub service: f64,
    /// Temporal coordination dimension, in [0, 1].
    pub temporal: f64,
    /// Sustainability coefficient, when supplied.
    pub sustainability: Option<f64>,
    /// sustainability × compatibility, when sustainability is supplied.
    pub cooperation_potential: Option<f64>,
}
