use std::fmt;

use serde::{Deserialize, Serialize};

use super::Regime;

/// Fixed set of joint-prediction labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outlook {
    StableCooperation,
    CooperationLikely,
    CooperationWithFluctuations,
    CooperationPossible,
    UnstableRegime,
    MildCompetition,
    StrongCompetition,
    InefficientCooperation,
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outlook::StableCooperation => "Stable cooperation",
            Outlook::CooperationLikely => "Cooperation likely",
            Outlook::CooperationWithFluctuations => "Cooperation with fluctuations",
            Outlook::CooperationPossible => "Cooperation possible",
            Outlook::UnstableRegime => "Unstable regime (near critical point)",
            Outlook::MildCompetition => "Mild competition",
            Outlook::StrongCompetition => "Strong competition",
            Outlook::InefficientCooperation => "Cooperation possible but inefficient",
        };
        write!(f, "{label}")
    }
}

/// Qualitative confidence in a joint prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    LowToModerate,
    Moderate,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::LowToModerate => "Low to Moderate",
            ConfidenceLevel::Moderate => "Moderate",
            ConfidenceLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Joint prediction combining the interaction and compatibility factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedPrediction {
    /// Interaction factor fed into the predictor.
    pub i_factor: f64,
    /// Compatibility coefficient fed into the predictor.
    pub compatibility: f64,
    /// Sustainability coefficient, when supplied.
    pub sustainability: Option<f64>,
    /// sustainability × compatibility, when sustainability is supplied.
    pub cooperation_potential: Option<f64>,
    /// Regime classification of the interaction factor.
    pub regime: Regime,
    /// Predicted relationship outlook.
    pub outlook: Outlook,
    /// Qualitative confidence in the outlook.
    pub confidence: ConfidenceLevel,
}
