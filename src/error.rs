use thiserror::Error;

// Unified error type for dualmat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    #[error("invalid delimiter pattern: {0}")]
    InvalidPattern(String),
    #[error("token {index} ({token:?}) is not a number")]
    ParseElement { index: usize, token: String },
}

pub type Result<T> = std::result::Result<T, MatError>;
