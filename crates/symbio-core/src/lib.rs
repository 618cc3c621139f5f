//! # symbio-core
//!
//! Foundation crate for the Symbio interaction analysis engine.
//! Defines all shared types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod validate;

// Re-export the most commonly used types at the crate root.
pub use config::{BootstrapConfig, DimensionWeights};
pub use errors::{SymbioError, SymbioResult};
pub use models::{
    CombinedPrediction, CompatibilityResult, ConfidenceInterval, ConfidenceLevel,
    EstimationMethod, InteractionResult, Outlook, Regime,
};
