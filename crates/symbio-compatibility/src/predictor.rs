//! Joint prediction from the interaction factor and compatibility.
//!
//! A small decision table, evaluated strictly in order; the first matching
//! rule wins. The ordering among overlapping conditions is part of the
//! observable contract: the critical-window rule is reachable only when the
//! cooperation rules above it fail their compatibility conditions.

use tracing::debug;

use symbio_core::constants::PREDICTION_CRITICAL_BAND;
use symbio_core::models::{CombinedPrediction, ConfidenceLevel, Outlook, Regime};

/// Combine an interaction factor and a compatibility coefficient (plus an
/// optional sustainability coefficient) into an outlook/confidence verdict.
pub fn predict(
    i_factor: f64,
    compatibility: f64,
    sustainability: Option<f64>,
) -> CombinedPrediction {
    let cooperation_potential = sustainability.map(|s| s * compatibility);
    let regime = Regime::classify(i_factor);
    let (outlook, confidence) = evaluate(i_factor, compatibility, cooperation_potential);
    debug!(i_factor, compatibility, outlook = %outlook, "joint prediction");
    CombinedPrediction {
        i_factor,
        compatibility,
        sustainability,
        cooperation_potential,
        regime,
        outlook,
        confidence,
    }
}

fn evaluate(
    i_factor: f64,
    compatibility: f64,
    potential: Option<f64>,
) -> (Outlook, ConfidenceLevel) {
    // Rule 1: strong cooperation conditions.
    if i_factor < 0.7 && compatibility > 0.7 {
        return if potential.is_some_and(|p| p > 0.6) {
            (Outlook::StableCooperation, ConfidenceLevel::High)
        } else if compatibility > 0.8 {
            (Outlook::StableCooperation, ConfidenceLevel::Moderate)
        } else {
            (Outlook::CooperationLikely, ConfidenceLevel::Moderate)
        };
    }

    // Rule 2: moderate cooperation conditions.
    if i_factor < 1.0 && compatibility > 0.5 {
        return if potential.is_some_and(|p| p > 0.5) {
            (Outlook::CooperationWithFluctuations, ConfidenceLevel::Moderate)
        } else {
            (Outlook::CooperationPossible, ConfidenceLevel::LowToModerate)
        };
    }

    // Rule 3: critical window.
    if (i_factor - 1.0).abs() < PREDICTION_CRITICAL_BAND {
        return (Outlook::UnstableRegime, ConfidenceLevel::Low);
    }

    // Rule 4: competition.
    if i_factor > 1.0 {
        return if i_factor < 1.3 {
            (Outlook::MildCompetition, ConfidenceLevel::Moderate)
        } else {
            (Outlook::StrongCompetition, ConfidenceLevel::High)
        };
    }

    // Rule 5: cooperation favored but compatibility too low to use it.
    (Outlook::InefficientCooperation, ConfidenceLevel::Low)
}
