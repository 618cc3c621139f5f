/// Out-of-range input errors for probability-like values.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{field} must be in [0, 1], got {value}")]
    OutsideUnitInterval { field: &'static str, value: f64 },

    #[error("{field} must be in (0, 1], got {value}")]
    OutsideHalfOpenUnit { field: &'static str, value: f64 },
}
