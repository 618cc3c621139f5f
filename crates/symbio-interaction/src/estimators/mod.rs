//! Derivation of (overlap, differentiation) from raw observational inputs.
//!
//! Each input variant selects exactly one estimation method; the variant
//! itself is the mode-selection contract. Every derived pair passes the same
//! post-estimation range validation before the factor is computed.

use serde::{Deserialize, Serialize};

use symbio_core::errors::{ShapeError, SymbioResult};
use symbio_core::models::EstimationMethod;
use symbio_core::validate;

pub mod resource;
pub mod spatial;
pub mod temporal;

/// Raw observational input for one pairwise estimate.
///
/// Spatial distributions are supplied flattened (row-major); all spatial
/// statistics operate on flat index positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationInput {
    Direct { overlap: f64, differentiation: f64 },
    ResourceVectors { a: Vec<f64>, b: Vec<f64> },
    TemporalPatterns { a: Vec<f64>, b: Vec<f64> },
    SpatialPatterns { a: Vec<f64>, b: Vec<f64> },
}

impl EstimationInput {
    /// Estimation method selected by this input.
    pub fn method(&self) -> EstimationMethod {
        match self {
            EstimationInput::Direct { .. } => EstimationMethod::Direct,
            EstimationInput::ResourceVectors { .. } => EstimationMethod::ResourceVectors,
            EstimationInput::TemporalPatterns { .. } => EstimationMethod::Temporal,
            EstimationInput::SpatialPatterns { .. } => EstimationMethod::Spatial,
        }
    }
}

/// Derive and validate the (overlap, differentiation) pair.
pub fn estimate(input: &EstimationInput) -> SymbioResult<(f64, f64)> {
    let (overlap, differentiation) = match input {
        EstimationInput::Direct {
            overlap,
            differentiation,
        } => (*overlap, *differentiation),
        EstimationInput::ResourceVectors { a, b } => {
            check_pair("resource_vectors", a, b)?;
            resource::estimate(a, b)
        }
        EstimationInput::TemporalPatterns { a, b } => {
            check_pair("temporal_patterns", a, b)?;
            temporal::estimate(a, b)
        }
        EstimationInput::SpatialPatterns { a, b } => {
            check_pair("spatial_patterns", a, b)?;
            spatial::estimate(a, b)
        }
    };
    validate::unit_interval("overlap", overlap)?;
    validate::half_open_unit("differentiation", differentiation)?;
    Ok((overlap, differentiation))
}

fn check_pair(field: &'static str, a: &[f64], b: &[f64]) -> Result<(), ShapeError> {
    if a.is_empty() || b.is_empty() {
        return Err(ShapeError::EmptyInput { field });
    }
    if a.len() != b.len() {
        return Err(ShapeError::LengthMismatch {
            field,
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
