mod config_error;
mod domain_error;
mod shape_error;

pub use config_error::ConfigError;
pub use domain_error::DomainError;
pub use shape_error::ShapeError;

/// Umbrella error for the whole engine. Every variant is a caller-input
/// error; there is no internal/fatal class.
#[derive(Debug, thiserror::Error)]
pub enum SymbioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Result alias used across the workspace.
pub type SymbioResult<T> = Result<T, SymbioError>;
