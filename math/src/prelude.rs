pub use crate::{rat, rat_vec};
pub use crate::{
    error::{DecodeError, MathError, RationalError},
    radix::{decode_base_value, Radix, MAX_RADIX, MIN_RADIX},
    rational::Rational,
};
pub use num_bigint::BigInt;
