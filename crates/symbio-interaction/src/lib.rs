//! # symbio-interaction
//!
//! Interaction-factor estimation: `i = overlap / differentiation`, regime
//! classification, and optional bootstrap uncertainty analysis.
//!
//! ## 4 estimation methods
//!
//! | Method | Overlap | Differentiation |
//! |--------|---------|-----------------|
//! | Direct | passed through | passed through |
//! | Resource vectors | cosine similarity | 1 − abs(Pearson r) |
//! | Temporal patterns | abs(Pearson r) of normalized series | peak separation |
//! | Spatial patterns | histogram intersection | center-of-mass separation |
//!
//! A positive uncertainty attaches a 95% parametric-bootstrap confidence
//! interval to the factor. Batch analysis returns named pairs sorted
//! ascending by factor (most cooperative first).

pub mod bootstrap;
pub mod engine;
pub mod estimators;
pub mod stats;

pub use engine::{InteractionEngine, PairInteraction, PairRequest};
pub use estimators::EstimationInput;
