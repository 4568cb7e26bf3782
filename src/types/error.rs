use thiserror::Error;

#[derive(Debug, Error)]
pub enum CastError {
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("non-finite coordinate: {0}")]
    NonFinite(String),
    #[error("direction vector has zero length")]
    ZeroDirection,
}
