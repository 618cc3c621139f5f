/// Symbio system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Half-width of the critical band around i = 1.0 for regime classification.
pub const CRITICAL_BAND: f64 = 0.05;

/// Half-width of the wider critical window used by the joint predictor.
pub const PREDICTION_CRITICAL_BAND: f64 = 0.1;

/// Default number of bootstrap samples for confidence intervals.
pub const DEFAULT_BOOTSTRAP_SAMPLES: usize = 1000;

/// Percentile bounds of the 95% bootstrap confidence interval.
pub const CI_LOWER_PERCENTILE: f64 = 2.5;
pub const CI_UPPER_PERCENTILE: f64 = 97.5;

/// Epsilon guard for norm, range, and mass denominators.
pub const NORM_EPSILON: f64 = 1e-10;

/// Floor applied to derived differentiation values.
pub const DIFFERENTIATION_FLOOR: f64 = 0.1;

/// Floor applied to bootstrap differentiation samples (keeps ratios finite).
pub const BOOTSTRAP_DIFFERENTIATION_FLOOR: f64 = 0.01;

/// Fallback value when a series or vector has no variance.
pub const NO_VARIANCE_FALLBACK: f64 = 0.5;

/// Tolerance on the dimension-weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
