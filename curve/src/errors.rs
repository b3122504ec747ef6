//! Error types for field arithmetic, point construction and point encoding.

/// Reasons a byte string or numeric string was rejected.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("value is not below the modulus")]
    NonCanonical,
    #[error("malformed numeric string {0:?}")]
    MalformedNumber(String),
}

/// Curve error.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("arithmetic domain error: {0}")]
    ArithmeticDomain(&'static str),
}

/// Curve result.
pub type Result<T> = std::result::Result<T, Error>;
