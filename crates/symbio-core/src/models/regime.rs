use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CRITICAL_BAND;

/// Discrete classification of an interaction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Cooperative,
    Critical,
    Competitive,
}

impl Regime {
    /// Classify an interaction factor.
    ///
    /// The critical band is checked first so values just above or just
    /// below 1.0 both land in `Critical`.
    pub fn classify(i_factor: f64) -> Self {
        if (i_factor - 1.0).abs() < CRITICAL_BAND {
            Regime::Critical
        } else if i_factor < 1.0 {
            Regime::Cooperative
        } else {
            Regime::Competitive
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Regime::Cooperative => "Cooperative",
            Regime::Critical => "Critical",
            Regime::Competitive => "Competitive",
        };
        write!(f, "{label}")
    }
}
