//! Weighted aggregation of compatibility dimensions.

use tracing::debug;

use symbio_core::config::DimensionWeights;
use symbio_core::errors::SymbioResult;
use symbio_core::models::CompatibilityResult;
use symbio_core::validate;

/// Aggregate the three alignment dimensions into a compatibility
/// coefficient. When a sustainability score is supplied, the result also
/// carries the cooperation potential (sustainability × compatibility).
///
/// `weights` defaults to near-equal weighting (0.33, 0.33, 0.34).
pub fn estimate_compatibility(
    physical: f64,
    service: f64,
    temporal: f64,
    sustainability: Option<f64>,
    weights: Option<DimensionWeights>,
) -> SymbioResult<CompatibilityResult> {
    validate::unit_interval("physical", physical)?;
    validate::unit_interval("service", service)?;
    validate::unit_interval("temporal", temporal)?;
    if let Some(value) = sustainability {
        validate::unit_interval("sustainability", value)?;
    }

    let weights = weights.unwrap_or_default();
    weights.validate()?;

    let compatibility =
        weights.physical * physical + weights.service * service + weights.temporal * temporal;
    let cooperation_potential = sustainability.map(|s| s * compatibility);

    debug!(compatibility, "compatibility aggregated");
    Ok(CompatibilityResult {
        compatibility,
        physical,
        service,
        temporal,
        sustainability,
        cooperation_potential,
    })
}
