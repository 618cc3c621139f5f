/// Shape errors for paired vector/array inputs.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("{field}: paired inputs must have the same length, got {left} and {right}")]
    LengthMismatch {
        field: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{field}: input must not be empty")]
    EmptyInput { field: &'static str },
}
