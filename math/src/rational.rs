use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RationalError;

/// Exact fraction of two big integers, always held in canonical form.
///
/// The canonical form has a strictly positive denominator and
/// `gcd(|numer|, denom) == 1`; zero is `0/1`. Every constructor and every
/// arithmetic operation re-establishes it, so structural equality is value
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer / denom` in lowest terms.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, RationalError> {
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(numer, denom))
    }

    /// The integer `n` as the fraction `n/1`.
    pub fn of_integer(n: impl Into<BigInt>) -> Self {
        Self {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    // Callers guarantee `denom != 0`.
    fn reduce(mut numer: BigInt, mut denom: BigInt) -> Self {
        if numer.is_zero() {
            return Self::zero();
        }
        if denom.sign() == Sign::Minus {
            numer = -numer;
            denom = -denom;
        }
        let divisor = numer.gcd(&denom);
        if !divisor.is_one() {
            numer /= &divisor;
            denom /= &divisor;
        }
        Self { numer, denom }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.denom.is_one()
    }

    /// The integer value when the denominator is one, `None` otherwise.
    pub fn to_integer_if_exact(&self) -> Option<BigInt> {
        self.is_integral().then(|| self.numer.clone())
    }

    pub fn multiply(&self, rhs: &Rational) -> Rational {
        Self::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }

    /// Exact quotient; fails only when `rhs` is zero.
    pub fn divide(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }

    pub fn reciprocal(&self) -> Result<Rational, RationalError> {
        Self::one().divide(self)
    }

    pub fn abs(&self) -> Rational {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Nearest `f64`, for display and cross-checks only.
    ///
    /// Lossy: magnitudes past `f64::MAX` become infinite and most fractions
    /// round. Operands past `f64::MAX` are fine as long as the quotient fits.
    pub fn approximate(&self) -> f64 {
        if let (Some(numer), Some(denom)) =
            (self.numer.to_f64(), self.denom.to_f64())
        {
            if numer.is_finite() && denom.is_finite() {
                return numer / denom;
            }
        }

        // Keep the leading 64 bits of each side; the rest is a power of two.
        let numer_shift = self.numer.bits().saturating_sub(64);
        let denom_shift = self.denom.bits().saturating_sub(64);
        let numer = (&self.numer >> numer_shift).to_f64().unwrap_or(f64::NAN);
        let denom = (&self.denom >> denom_shift).to_f64().unwrap_or(f64::NAN);
        let exponent = (numer_shift as i64 - denom_shift as i64)
            .clamp(-4096, 4096) as i32;
        // Split the scale so neither factor overflows on its own.
        let half = exponent / 2;
        numer / denom * 2f64.powi(half) * 2f64.powi(exponent - half)
    }

    fn add_ref(&self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Self::reduce(&self.numer + &rhs.numer, self.denom.clone());
        }
        Self::reduce(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::of_integer(BigInt::one())
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::of_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::of_integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::of_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Self::of_integer(value)
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        self.add_ref(rhs)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.add_ref(&rhs)
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        self.add_ref(&-rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self.add_ref(&-rhs)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Rational {
        self.multiply(rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.multiply(&rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"n"` or `"n/d"` in decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RationalError::Malformed(s.to_owned());
        let parse =
            |part: &str| BigInt::from_str(part.trim()).map_err(|_| malformed());

        match s.split_once('/') {
            None => Ok(Self::of_integer(parse(s)?)),
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
        }
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
