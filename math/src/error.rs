use thiserror::Error;

pub mod decode {
    use thiserror::Error;

    use crate::radix::{MAX_RADIX, MIN_RADIX};

    /// Failures while turning a digit string into a big integer.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("digit string is empty")]
        EmptyValue,
        #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
        InvalidDigit {
            digit: char,
            position: usize,
            radix: u32,
        },
        #[error(
            "radix {0} is outside the supported range {min}..={max}",
            min = MIN_RADIX,
            max = MAX_RADIX
        )]
        InvalidRadix(u32),
    }
}

pub mod rational {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("division by zero")]
        DivisionByZero,
        #[error("malformed rational literal {0:?}")]
        Malformed(String),
    }
}

pub use decode::Error as DecodeError;
pub use rational::Error as RationalError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Rational(#[from] RationalError),
}

pub type Error = MathError;
