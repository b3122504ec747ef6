//! Error types for key derivation.

use bn254_curve::EncodingError;

/// Errors that can occur while parsing a scalar or deriving keys.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The scalar is zero or not below the group order r.
    #[error("scalar must be > 0 and < r")]
    ScalarOutOfRange,

    #[error(transparent)]
    Curve(#[from] bn254_curve::Error),

    /// A key record could not be rendered.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<EncodingError> for KeyError {
    fn from(err: EncodingError) -> Self {
        KeyError::Curve(err.into())
    }
}

impl From<serde_json::Error> for KeyError {
    fn from(err: serde_json::Error) -> Self {
        KeyError::Serialization(err.to_string())
    }
}
