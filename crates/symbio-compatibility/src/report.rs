//! Narrative rendering of finished analysis records.
//!
//! Pure formatting over already-computed results; nothing here feeds back
//! into the numeric pipeline.

use std::fmt::Write;

use symbio_core::models::{CombinedPrediction, CompatibilityResult, InteractionResult, Regime};

/// Narrative summary of an interaction estimate.
pub fn interaction_summary(result: &InteractionResult) -> String {
    let mut text = format!(
        "i-factor = {:.2} (method: {}, overlap {:.2}, differentiation {:.2})\n",
        result.i_factor, result.method, result.overlap, result.differentiation
    );
    let narrative = match result.regime {
        Regime::Cooperative if result.i_factor < 0.5 => {
            "Strong cooperation regime: high differentiation and low overlap \
             make joint operation clearly favorable."
        }
        Regime::Cooperative => {
            "Cooperative regime: differentiation exceeds overlap, so mutual \
             benefit outweighs interaction costs."
        }
        Regime::Critical => {
            "Critical threshold: overlap and differentiation are nearly \
             balanced. Small changes can flip the regime."
        }
        Regime::Competitive if result.i_factor < 1.5 => {
            "Competitive regime: overlap exceeds differentiation, so the \
             pair contends for the same resources."
        }
        Regime::Competitive => {
            "Strong competition regime: high overlap with little \
             differentiation produces zero-sum dynamics."
        }
    };
    text.push_str(narrative);
    if let Some(interval) = &result.confidence_interval {
        let _ = write!(
            text,
            "\n95% CI: [{:.2}, {:.2}]",
            interval.lower, interval.upper
        );
    }
    text
}

/// Narrative summary of a compatibility aggregation.
pub fn compatibility_summary(result: &CompatibilityResult) -> String {
    let mut text = format!(
        "compatibility = {:.2} ({})\n",
        result.compatibility,
        tier(result.compatibility)
    );
    let _ = write!(
        text,
        "physical {:.2}, service {:.2}, temporal {:.2}",
        result.physical, result.service, result.temporal
    );
    if let Some(sustainability) = result.sustainability {
        let _ = write!(text, "\nsustainability = {sustainability:.2}");
    }
    if let Some(potential) = result.cooperation_potential {
        let _ = write!(text, "\ncooperation potential = {potential:.2}");
    }
    text
}

/// Narrative summary of a joint prediction.
pub fn combined_summary(prediction: &CombinedPrediction) -> String {
    let mut text = format!(
        "i-factor = {:.2} ({} regime), compatibility = {:.2}\n",
        prediction.i_factor, prediction.regime, prediction.compatibility
    );
    if let Some(potential) = prediction.cooperation_potential {
        let _ = write!(text, "cooperation potential = {potential:.2}\n");
    }
    let _ = write!(
        text,
        "Prediction: {} (confidence: {})",
        prediction.outlook, prediction.confidence
    );
    text
}

fn tier(compatibility: f64) -> &'static str {
    if compatibility > 0.8 {
        "excellent"
    } else if compatibility > 0.6 {
        "good"
    } else if compatibility > 0.4 {
        "moderate"
    } else {
        "limited"
    }
}
