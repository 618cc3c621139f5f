use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BOOTSTRAP_SAMPLES;

/// Bootstrap subsystem configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of resampling draws per interval.
    pub samples: usize,
    /// Seed for the call-scoped generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_BOOTSTRAP_SAMPLES,
            seed: None,
        }
    }
}

impl BootstrapConfig {
    /// Seeded config for reproducible intervals.
    pub fn seeded(seed: u64) -> Self {
        Self {
            samples: DEFAULT_BOOTSTRAP_SAMPLES,
            seed: Some(seed),
        }
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}
