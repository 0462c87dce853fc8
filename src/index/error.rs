use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("cannot build an index from zero vectors")]
    Empty,

    #[error("embedding dimension must be greater than zero")]
    ZeroDimension,

    #[error("vector at slot {slot} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        slot: usize,
        expected: usize,
        actual: usize,
    },

    #[error("query dimension {actual} does not match index dimension {expected}")]
    QueryDimensionMismatch { expected: usize, actual: usize },
}
