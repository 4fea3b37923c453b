//! Exact arithmetic for secret reconstruction: radix decoding of unbounded
//! integers and a canonical big rational type.

pub mod error;
pub mod macros;
pub mod prelude;
pub mod radix;
pub mod rational;

pub use num_bigint::BigInt;
pub use radix::{decode_base_value, Radix};
pub use rational::Rational;
