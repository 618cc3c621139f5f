/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("dimension weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("{dimension} weight must be non-negative, got {value}")]
    NegativeWeight { dimension: &'static str, value: f64 },
}
