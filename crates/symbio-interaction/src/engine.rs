use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use symbio_core::config::BootstrapConfig;
use symbio_core::errors::SymbioResult;
use symbio_core::models::{InteractionResult, Regime};

use crate::bootstrap;
use crate::estimators::{self, EstimationInput};

/// Interaction engine: derives the (overlap, differentiation) pair,
/// computes the factor, classifies the regime, and optionally attaches a
/// bootstrap confidence interval.
pub struct InteractionEngine {
    bootstrap: BootstrapConfig,
}

impl InteractionEngine {
    /// Engine with the default bootstrap configuration (1000 samples,
    /// entropy-seeded).
    pub fn new() -> Self {
        Self {
            bootstrap: BootstrapConfig::default(),
        }
    }

    /// Engine with a custom bootstrap configuration.
    pub fn with_bootstrap(bootstrap: BootstrapConfig) -> Self {
        Self { bootstrap }
    }

    pub fn bootstrap_config(&self) -> &BootstrapConfig {
        &self.bootstrap
    }

    /// Point estimate without uncertainty analysis.
    pub fn estimate(&self, input: &EstimationInput) -> SymbioResult<InteractionResult> {
        self.run(input, None)
    }

    /// Point estimate plus a 95% bootstrap interval when `uncertainty` is
    /// positive. Non-positive uncertainty skips the bootstrap.
    pub fn estimate_with_uncertainty(
        &self,
        input: &EstimationInput,
        uncertainty: f64,
    ) -> SymbioResult<InteractionResult> {
        self.run(input, Some(uncertainty))
    }

    /// Analyze a collection of named pairs and return per-pair results
    /// sorted ascending by interaction factor (most cooperative first).
    /// Equal factors keep input order.
    pub fn estimate_batch(
        &self,
        requests: Vec<PairRequest>,
    ) -> SymbioResult<Vec<PairInteraction>> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let result = self.run(&request.input, request.uncertainty)?;
            results.push(PairInteraction {
                entity_a: request.entity_a,
                entity_b: request.entity_b,
                result,
            });
        }
        results.sort_by(|a, b| {
            a.result
                .i_factor
                .partial_cmp(&b.result.i_factor)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        info!(pairs = results.len(), "batch interaction analysis complete");
        Ok(results)
    }

    fn run(
        &self,
        input: &EstimationInput,
        uncertainty: Option<f64>,
    ) -> SymbioResult<InteractionResult> {
        let (overlap, differentiation) = estimators::estimate(input)?;
        let i_factor = overlap / differentiation;
        let regime = Regime::classify(i_factor);
        let confidence_interval = uncertainty.filter(|u| *u > 0.0).map(|u| {
            bootstrap::confidence_interval(overlap, differentiation, u, &self.bootstrap)
        });
        debug!(
            method = %input.method(),
            i_factor,
            regime = %regime,
            "interaction estimated"
        );
        Ok(InteractionResult {
            i_factor,
            overlap,
            differentiation,
            regime,
            confidence_interval,
            method: input.method(),
        })
    }
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Named-pair interaction request for batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRequest {
    pub entity_a: String,
    pub entity_b: String,
    pub input: EstimationInput,
    /// Standard error for bootstrap analysis of this pair, when wanted.
    pub uncertainty: Option<f64>,
}

/// Per-pair result of a batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairInteraction {
    pub entity_a: String,
    pub entity_b: String,
    pub result: InteractionResult,
}
