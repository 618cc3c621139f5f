use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;

/// Weights for the three compatibility dimensions.
///
/// Must be non-negative and sum to 1.0 within `WEIGHT_SUM_TOLERANCE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub physical: f64,
    pub service: f64,
    pub temporal: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            physical: 0.33,
            service: 0.33,
            temporal: 0.34,
        }
    }
}

impl DimensionWeights {
    pub fn new(physical: f64, service: f64, temporal: f64) -> Self {
        Self {
            physical,
            service,
            temporal,
        }
    }

    pub fn sum(&self) -> f64 {
        self.physical + self.service + self.temporal
    }

    /// Check the weight contract: non-negative entries, sum 1.0 ± tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in [
            ("physical", self.physical),
            ("service", self.service),
            ("temporal", self.temporal),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { dimension, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}
