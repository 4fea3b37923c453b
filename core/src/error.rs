use recon_math::error::{DecodeError, RationalError};
use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

/// Errors that can arise while reconstructing a secret from its shares.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error("Invalid threshold: k must be at least 1, got {0}")]
    InvalidK(usize),
    #[error("Insufficient points: need {required}, got {available}")]
    InsufficientPoints { required: usize, available: usize },
    #[error("Duplicate abscissa: index {0} appears more than once")]
    DuplicateAbscissa(i64),
    #[error("Share {index} could not be decoded")]
    Decode {
        index: i64,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Rational(#[from] RationalError),
    #[error("Interpolation system is singular")]
    SingularSystem,
}

impl ReconstructError {
    /// Attach the share index to a decoding failure.
    pub fn decode(index: i64, source: DecodeError) -> Self {
        ReconstructError::Decode { index, source }
    }
}
